pub mod config;
pub mod error;
pub mod review;

pub use config::{PipelineConfig, RegressionOptions};
pub use error::{PipelineError, Result};
pub use review::{MovieReviews, ParseStats, Review, ReviewCorpus};
