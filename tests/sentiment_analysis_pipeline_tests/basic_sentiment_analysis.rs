use std::fs;

use pretty_assertions::assert_eq;
use review_sentiment::pipelines::sentiment_analysis_pipeline::*;
use review_sentiment::{PipelineError, ReviewParser};

use crate::fixed_model::{fixed_pipeline, FixedModel, DUMP};

#[test]
fn scores_and_summarizes_each_movie() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reviews.txt");
    fs::write(&path, DUMP)?;

    let report = fixed_pipeline()?.analyze_file(&path)?;

    let records: Vec<_> = report
        .records
        .iter()
        .map(|r| {
            (
                r.movie.as_str(),
                r.review_number,
                r.review_text.as_str(),
                r.sentiment,
                r.compound_score,
            )
        })
        .collect();
    assert_eq!(
        records,
        vec![
            ("X", 1, "great film", SentimentLabel::Positive, 0.6),
            ("X", 2, "terrible", SentimentLabel::Negative, -0.6),
        ]
    );

    let x = report.summary_for("X").expect("summary for X");
    assert_eq!(x.total_reviews, 2);
    assert_eq!(
        (x.positive_pct, x.negative_pct, x.neutral_pct),
        (50.0, 50.0, 0.0)
    );

    let y = report.summary_for("Y").expect("summary for Y");
    assert_eq!(y.total_reviews, 0);
    assert_eq!(
        (y.positive_pct, y.negative_pct, y.neutral_pct),
        (0.0, 0.0, 0.0)
    );
    assert_eq!(
        report.warnings,
        vec!["No reviews found for Y in the input file.".to_string()]
    );
    Ok(())
}

#[test]
fn empty_review_text_is_skipped() -> anyhow::Result<()> {
    let corpus = ReviewParser::new().parse_str(
        "=== Reviews for X ===\nReview 1: great film\nReview 2: terrible\nReview 3:   \n",
    );
    let report = fixed_pipeline()?.analyze(&corpus);

    assert_eq!(report.total_reviews(), 2);
    assert_eq!(report.summary_for("X").map(|s| s.total_reviews), Some(2));
    assert_eq!(report.parse_stats.empty_reviews, 1);
    assert!(report.records.iter().all(|r| r.review_number != 3));
    Ok(())
}

#[test]
fn repeated_movie_block_replaces_earlier_reviews() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reviews.txt");
    fs::write(
        &path,
        "=== Reviews for A ===\nReview 1: great film\n\
         === Reviews for B ===\nReview 1: great film\n\
         === Reviews for A ===\nReview 1: terrible\nReview 2: great film\n",
    )?;

    let pipeline = SentimentAnalysisPipelineBuilder::<FixedModel>::new(vec![
        ("great film", 0.6),
        ("terrible", -0.6),
    ])
    .parser(ReviewParser::new())
    .build()?;
    assert_eq!(pipeline.model().polarity("terrible"), -0.6);

    let report = pipeline.analyze_file(&path)?;
    let titles: Vec<_> = report.summaries.iter().map(|s| s.movie_title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    let a: Vec<_> = report
        .records_for("A")
        .map(|r| (r.review_number, r.review_text.as_str(), r.sentiment))
        .collect();
    assert_eq!(
        a,
        vec![
            (1, "terrible", SentimentLabel::Negative),
            (2, "great film", SentimentLabel::Positive),
        ]
    );
    assert_eq!(report.summary_for("A").map(|s| s.positive_pct), Some(50.0));
    Ok(())
}

#[test]
fn missing_input_is_file_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope.txt");

    let err = fixed_pipeline()?.analyze_file(&missing).unwrap_err();
    assert!(matches!(err, PipelineError::FileNotFound { ref path } if *path == missing));
    Ok(())
}
