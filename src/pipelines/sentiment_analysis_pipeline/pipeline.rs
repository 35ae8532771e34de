use std::path::Path;

use serde::Serialize;

use super::label::{SentimentLabel, SentimentScore};
use super::model::SentimentAnalysisModel;
use super::summary::{LabelCounts, MovieSummary};
use crate::core::{ParseStats, Result, Review, ReviewCorpus};
use crate::parsing::ReviewParser;

/// One scored review, as written to the detailed results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRecord {
    pub movie: String,
    pub review_number: usize,
    pub review_text: String,
    pub sentiment: SentimentLabel,
    pub compound_score: f64,
}

impl SentimentRecord {
    pub fn new(review: &Review, score: SentimentScore) -> Self {
        Self {
            movie: review.movie_title().to_string(),
            review_number: review.ordinal(),
            review_text: review.text().to_string(),
            sentiment: score.label,
            compound_score: score.compound,
        }
    }
}

/// Everything a run produces, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentReport {
    pub records: Vec<SentimentRecord>,
    pub summaries: Vec<MovieSummary>,
    pub warnings: Vec<String>,
    pub parse_stats: ParseStats,
}

impl SentimentReport {
    pub fn summary_for(&self, movie: &str) -> Option<&MovieSummary> {
        self.summaries.iter().find(|s| s.movie_title == movie)
    }

    pub fn records_for<'a>(&'a self, movie: &'a str) -> impl Iterator<Item = &'a SentimentRecord> {
        self.records.iter().filter(move |r| r.movie == movie)
    }

    pub fn total_reviews(&self) -> usize {
        self.records.len()
    }
}

/// Scores reviews with a [`SentimentAnalysisModel`] and aggregates them per movie.
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) parser: ReviewParser,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Wraps an already constructed model.
    pub fn from_model(model: M) -> Self {
        Self {
            model,
            parser: ReviewParser::new(),
        }
    }

    /// Score and label a single text.
    pub fn predict(&self, text: &str) -> SentimentScore {
        SentimentScore::new(self.model.polarity(text))
    }

    /// Scores every review in `corpus` and builds one summary per movie.
    /// Movies without reviews still get an all-zero summary and a warning.
    pub fn analyze(&self, corpus: &ReviewCorpus) -> SentimentReport {
        let mut report = SentimentReport {
            parse_stats: corpus.stats(),
            ..Default::default()
        };

        for movie in corpus {
            if movie.is_empty() {
                let warning = format!("No reviews found for {} in the input file.", movie.title);
                tracing::warn!("{warning}");
                report.warnings.push(warning);
            }

            let mut counts = LabelCounts::default();
            for review in movie.iter_reviews() {
                let score = self.predict(review.text());
                tracing::trace!(
                    movie = %movie.title,
                    review = review.ordinal(),
                    compound = score.compound,
                    "scored review"
                );
                counts = counts.record(score.label);
                report.records.push(SentimentRecord::new(&review, score));
            }

            let summary = counts.summarize(&movie.title);
            tracing::debug!(
                movie = %summary.movie_title,
                total = summary.total_reviews,
                "positive {:.2}% / negative {:.2}% / neutral {:.2}%",
                summary.positive_pct,
                summary.negative_pct,
                summary.neutral_pct
            );
            report.summaries.push(summary);
        }

        let skipped = report.parse_stats.skipped_lines();
        if skipped > 0 {
            report
                .warnings
                .push(format!("Skipped {skipped} unrecognized or empty review line(s)."));
        }
        report
    }

    /// Parses a review dump and analyzes it.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<SentimentReport> {
        let corpus = self.parser.parse_file(path)?;
        Ok(self.analyze(&corpus))
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
