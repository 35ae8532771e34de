use std::fs;

use pretty_assertions::assert_eq;
use review_sentiment::output::save_sentiment_outputs;
use review_sentiment::pipelines::sentiment_analysis_pipeline::*;
use review_sentiment::{ParseStats, PipelineConfig};

fn report() -> SentimentReport {
    SentimentReport {
        records: vec![
            SentimentRecord {
                movie: "X".to_string(),
                review_number: 1,
                review_text: "great film, loved it".to_string(),
                sentiment: SentimentLabel::Positive,
                compound_score: 0.6,
            },
            SentimentRecord {
                movie: "X".to_string(),
                review_number: 2,
                review_text: "terrible".to_string(),
                sentiment: SentimentLabel::Negative,
                compound_score: -0.6,
            },
        ],
        summaries: vec![
            MovieSummary::from_labels("X", [SentimentLabel::Positive, SentimentLabel::Negative]),
            MovieSummary::from_labels("Y", Vec::<SentimentLabel>::new()),
        ],
        warnings: vec!["No reviews found for Y in the input file.".to_string()],
        parse_stats: ParseStats::default(),
    }
}

#[test]
fn writes_every_sentiment_output() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PipelineConfig {
        output_dir: dir.path().join("out"),
        ..Default::default()
    };

    let written = save_sentiment_outputs(&config, &report())?;
    assert_eq!(written.len(), 4);
    assert!(written.iter().all(|p| p.exists()));

    assert_eq!(
        fs::read_to_string(config.detailed_csv_path())?,
        "Movie,Review Number,Review Text,Sentiment,Compound Score\n\
         X,1,\"great film, loved it\",Positive,0.6\n\
         X,2,terrible,Negative,-0.6\n"
    );
    assert_eq!(
        fs::read_to_string(config.summary_csv_path())?,
        "Movie,Total Reviews,Positive (%),Negative (%),Neutral (%)\n\
         X,2,50.00,50.00,0.00\n\
         Y,0,0.00,0.00,0.00\n"
    );
    assert_eq!(
        fs::read_to_string(config.summary_txt_path())?,
        "\n=== X ===\nTotal Reviews: 2\nPositive: 50.00%\nNegative: 50.00%\nNeutral: 0.00%\n\
         \n=== Y ===\nTotal Reviews: 0\nPositive: 0.00%\nNegative: 0.00%\nNeutral: 0.00%\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.report_json_path())?)?;
    assert_eq!(json["summaries"][0]["movie_title"], "X");
    assert_eq!(json["records"][1]["sentiment"], "Negative");
    Ok(())
}

#[test]
fn json_report_can_be_disabled() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        write_json: false,
        ..Default::default()
    };

    let written = save_sentiment_outputs(&config, &report())?;
    assert_eq!(written.len(), 3);
    assert!(!config.report_json_path().exists());
    Ok(())
}
