use std::fs;

use pretty_assertions::assert_eq;
use review_sentiment::datasets::{load_financials, read_financials};
use review_sentiment::output::{save_combined_table, save_correlation_outputs};
use review_sentiment::pipelines::revenue_correlation_pipeline::*;
use review_sentiment::pipelines::sentiment_analysis_pipeline::MovieSummary;
use review_sentiment::{PipelineConfig, PipelineError};

fn summary(title: &str, positive: f64, negative: f64) -> MovieSummary {
    MovieSummary {
        movie_title: title.to_string(),
        total_reviews: 20,
        positive_pct: positive,
        negative_pct: negative,
        neutral_pct: 100.0 - positive - negative,
    }
}

#[test]
fn revenue_correlation_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let csv_path = dir.path().join("financials.csv");
    fs::write(
        &csv_path,
        "Title,Year,Final_Revenue\n\
         Alpha,2019,\"$85,000,000\"\n\
         Beta,2020,65000000\n\
         Gamma,2021,45000000\n\
         Delta,2022,25000000\n\
         Epsilon,2023,75000000\n\
         Ghost,2023,10000000\n",
    )?;
    let summaries = vec![
        summary("Alpha", 80.0, 10.0),
        summary("Beta", 60.0, 20.0),
        summary("Gamma", 40.0, 30.0),
        summary("Delta", 20.0, 50.0),
        summary("Epsilon", 70.0, 5.0),
    ];

    let financials = load_financials(&csv_path)?;
    let report =
        RevenueCorrelationPipeline::new(Default::default()).run(&financials, &summaries)?;

    assert_eq!(report.combined.len(), 6);
    assert_eq!(report.observations, 5);
    assert!(report.combined[5].sentiment.is_none());

    let r = report
        .matrix
        .get(REVENUE_LABEL, SENTIMENT_LABELS[0])
        .expect("revenue/positive cell");
    assert!((r - 1.0).abs() < 1e-9, "revenue tracks positive share, got {r}");

    let regression = report.regression.as_ref().expect("five rows are enough");
    assert_eq!(regression.train_rows, 5);
    assert!((regression.r2 - 1.0).abs() < 1e-6);
    let predicted = regression.fit.predict(&[50.0, 25.0, 25.0]);
    assert!((predicted - 55_000_000.0).abs() < 1e3, "got {predicted}");

    let config = PipelineConfig {
        output_dir: dir.path().join("out"),
        ..Default::default()
    };
    save_correlation_outputs(&config, &report)?;

    let combined = fs::read_to_string(config.combined_csv_path())?;
    assert!(combined.starts_with(
        "Title,Final_Revenue,Total Reviews,Positive (%),Negative (%),Neutral (%)\n"
    ));
    assert!(combined.ends_with("Ghost,10000000,,,,\n"));

    let matrix = fs::read_to_string(config.correlation_csv_path())?;
    assert_eq!(matrix.lines().count(), 5);
    Ok(())
}

#[test]
fn too_few_joined_rows_is_insufficient_data() -> anyhow::Result<()> {
    let financials = read_financials(
        "Title,worldwide_gross\nAlpha,100\nBeta,200\n".as_bytes(),
        "inline",
    )?;
    let err = RevenueCorrelationPipeline::new(Default::default())
        .run(&financials, &[summary("Alpha", 50.0, 20.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::InsufficientData { needed: 2, found: 1 }
    ));
    Ok(())
}

#[test]
fn combined_table_is_written_when_correlation_is_skipped() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let financials = read_financials(
        "Title,Final_Revenue\nAlpha,100\nBeta,200\nGamma,\n".as_bytes(),
        "inline",
    )?;
    let summaries = [summary("Alpha", 50.0, 20.0), summary("Gamma", 10.0, 10.0)];

    let combined = RevenueCorrelationPipeline::combine(&financials, &summaries);
    let result = RevenueCorrelationPipeline::new(Default::default()).correlate(&combined);
    assert!(matches!(
        result,
        Err(PipelineError::InsufficientData { found: 1, .. })
    ));

    let config = PipelineConfig {
        output_dir: dir.path().join("out"),
        ..Default::default()
    };
    let path = save_combined_table(&config, &combined)?;
    assert_eq!(path, config.combined_csv_path());
    assert_eq!(
        fs::read_to_string(&path)?,
        "Title,Final_Revenue,Total Reviews,Positive (%),Negative (%),Neutral (%)\n\
         Alpha,100,20,50,20,30\n\
         Beta,200,,,,\n\
         Gamma,,20,10,10,80\n"
    );
    assert!(!config.correlation_csv_path().exists());
    Ok(())
}
