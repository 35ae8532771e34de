// Pipeline modules organized by functionality
pub mod revenue_correlation_pipeline;
pub mod sentiment_analysis_pipeline;

// Re-export the entry points for convenience
pub use revenue_correlation_pipeline::{CorrelationReport, RevenueCorrelationPipeline};
pub use sentiment_analysis_pipeline::{
    SentimentAnalysisModel, SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder,
    SentimentReport,
};
