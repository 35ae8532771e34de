use std::fs;

use pretty_assertions::assert_eq;
use review_sentiment::pipelines::sentiment_analysis_pipeline::*;

use crate::fixed_model::DUMP;

#[test]
fn analyzing_twice_gives_identical_reports() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reviews.txt");
    fs::write(&path, DUMP)?;

    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
    let first = pipeline.analyze_file(&path)?;
    let second = pipeline.analyze_file(&path)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn lexicon_pipeline_labels_obvious_reviews() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    assert_eq!(pipeline.predict("great film").label, SentimentLabel::Positive);
    assert_eq!(pipeline.predict("terrible").label, SentimentLabel::Negative);
    assert_eq!(pipeline.predict("not good").label, SentimentLabel::Negative);
    assert_eq!(
        pipeline.predict("The film runs two hours.").label,
        SentimentLabel::Neutral
    );
    Ok(())
}

#[test]
fn missing_lexicon_file_fails_the_build() {
    let result = SentimentAnalysisPipelineBuilder::lexicon()
        .word_file("no/such/lexicon.txt")
        .build();
    assert!(result.is_err());
}
