pub mod cli;
pub mod core;
pub mod datasets;
pub mod models;
pub mod output;
pub mod parsing;
pub mod pipelines;

// Re-export core types
pub use core::{
    MovieReviews, ParseStats, PipelineConfig, PipelineError, RegressionOptions, Result, Review,
    ReviewCorpus,
};

// Re-export the parser and the default scorer for easier access
pub use models::{Lexicon, LexiconModel};
pub use parsing::{read_reviews, ReviewParser};
