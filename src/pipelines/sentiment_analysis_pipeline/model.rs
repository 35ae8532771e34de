use crate::core::Result;

/// A polarity scorer: text in, compound score in [-1, 1] out.
///
/// Scoring is infallible; only construction may fail (e.g. a lexicon file
/// that cannot be read).
pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> Result<Self>
    where
        Self: Sized;

    fn polarity(&self, text: &str) -> f64;
}
