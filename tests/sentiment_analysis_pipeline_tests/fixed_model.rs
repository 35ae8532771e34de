use std::collections::HashMap;

use review_sentiment::pipelines::sentiment_analysis_pipeline::*;

/// Scores texts from a fixed table; anything unknown is neutral.
#[derive(Debug, Clone)]
pub struct FixedModel {
    scores: HashMap<String, f64>,
}

impl SentimentAnalysisModel for FixedModel {
    type Options = Vec<(&'static str, f64)>;

    fn new(options: Self::Options) -> Result<Self> {
        Ok(Self {
            scores: options
                .into_iter()
                .map(|(text, score)| (text.to_string(), score))
                .collect(),
        })
    }

    fn polarity(&self, text: &str) -> f64 {
        self.scores.get(text).copied().unwrap_or(0.0)
    }
}

pub fn fixed_pipeline() -> anyhow::Result<SentimentAnalysisPipeline<FixedModel>> {
    let pipeline = SentimentAnalysisPipelineBuilder::<FixedModel>::new(vec![
        ("great film", 0.6),
        ("terrible", -0.6),
    ])
    .build()?;
    Ok(pipeline)
}

pub const DUMP: &str = "\
=== Reviews for X ===
Review 1: great film
Review 2: terrible
=== Reviews for Y ===
";
