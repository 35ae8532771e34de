use serde::{Deserialize, Serialize};

use super::label::SentimentLabel;

/// Positive/negative/neutral breakdown for one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub movie_title: String,
    pub total_reviews: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

impl MovieSummary {
    /// Reduces one movie's labels into a summary. With no labels every
    /// percentage is zero.
    pub fn from_labels(
        movie_title: &str,
        labels: impl IntoIterator<Item = SentimentLabel>,
    ) -> Self {
        labels
            .into_iter()
            .fold(LabelCounts::default(), LabelCounts::record)
            .summarize(movie_title)
    }

    pub fn is_empty(&self) -> bool {
        self.total_reviews == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn record(mut self, label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
        self
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn summarize(&self, movie_title: &str) -> MovieSummary {
        let total = self.total();
        let pct = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };
        MovieSummary {
            movie_title: movie_title.to_string(),
            total_reviews: total,
            positive_pct: pct(self.positive),
            negative_pct: pct(self.negative),
            neutral_pct: pct(self.neutral),
        }
    }
}
