//! Sentiment analysis pipeline for classifying movie reviews.
//!
//! This module scores each review with a polarity model, buckets the compound
//! score into Positive / Negative / Neutral, and aggregates the labels into a
//! per-movie percentage breakdown. It's the core of the review-to-summary run.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - Scores reviews and builds a [`SentimentReport`]
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for polarity scorer implementations
//! - [`MovieSummary`] - Per-movie label percentages
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use review_sentiment::pipelines::sentiment_analysis_pipeline::*;
//!
//! # fn run() -> anyhow::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
//!
//! let report = pipeline.analyze_file("imdb_reviews.txt")?;
//! for summary in &report.summaries {
//!     println!("{}: {:.2}% positive", summary.movie_title, summary.positive_pct);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod label;
pub mod model;
pub mod pipeline;
pub mod summary;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use label::{SentimentLabel, SentimentScore, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use model::SentimentAnalysisModel;
pub use pipeline::{SentimentAnalysisPipeline, SentimentRecord, SentimentReport};
pub use summary::{LabelCounts, MovieSummary};

pub use crate::models::{LexiconModel, LexiconOptions};

pub use crate::core::Result;
