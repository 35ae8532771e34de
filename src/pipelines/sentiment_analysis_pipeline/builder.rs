use std::path::PathBuf;

use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::Result;
use crate::models::{LexiconModel, LexiconOptions};
use crate::parsing::ReviewParser;

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
    parser: ReviewParser,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self {
            options,
            parser: ReviewParser::new(),
        }
    }

    /// Use a preconfigured parser for `analyze_file`.
    pub fn parser(mut self, parser: ReviewParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn build(self) -> Result<SentimentAnalysisPipeline<M>> {
        tracing::debug!(options = ?self.options, "building sentiment pipeline");
        let model = M::new(self.options)?;
        Ok(SentimentAnalysisPipeline {
            model,
            parser: self.parser,
        })
    }
}

impl SentimentAnalysisPipelineBuilder<LexiconModel> {
    /// Pipeline backed by the built-in lexicon scorer.
    pub fn lexicon() -> Self {
        Self::new(LexiconOptions::default())
    }

    /// Load word valences from a VADER-format lexicon file instead of the
    /// built-in table.
    pub fn word_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.word_file = Some(path.into());
        self
    }
}
