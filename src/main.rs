use anyhow::{Context, Result};
use clap::Parser;
use review_sentiment::cli::{AnalyzeArgs, Cli, Commands};
use review_sentiment::datasets::{load_financials, parse_omdb_ratings};
use review_sentiment::output;
use review_sentiment::pipelines::revenue_correlation_pipeline::RevenueCorrelationPipeline;
use review_sentiment::pipelines::sentiment_analysis_pipeline::{
    MovieSummary, SentimentAnalysisPipelineBuilder,
};
use review_sentiment::{PipelineConfig, PipelineError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => analyze(args),
        Commands::Ratings { input } => {
            let ratings = parse_omdb_ratings(&input)?;
            println!("{}", serde_json::to_string_pretty(&ratings)?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    let config = args.apply(config).map_err(anyhow::Error::msg)?;

    let mut builder = SentimentAnalysisPipelineBuilder::lexicon();
    if let Some(path) = &args.lexicon {
        builder = builder.word_file(path);
    }
    let pipeline = builder.build().context("Failed to build sentiment pipeline")?;

    tracing::info!("Reading reviews...");
    let report = pipeline
        .analyze_file(&args.reviews)
        .with_context(|| format!("Failed to analyze {}", args.reviews.display()))?;
    if report.records.is_empty() {
        tracing::warn!("No reviews were scored; outputs contain summaries only");
    }

    tracing::info!("Saving sentiment analysis outputs...");
    output::save_sentiment_outputs(&config, &report)?;

    println!("\n=== Sentiment Summary ===");
    print!("{}", output::render_table(&report.summaries));

    if let Some(revenue_path) = &args.revenue {
        correlate(&config, revenue_path, &report.summaries)?;
    }
    Ok(())
}

fn correlate(
    config: &PipelineConfig,
    revenue_path: &std::path::Path,
    summaries: &[MovieSummary],
) -> Result<()> {
    tracing::info!("Performing correlation analysis with movie financial data...");
    let financials = load_financials(revenue_path)
        .with_context(|| format!("Failed to load {}", revenue_path.display()))?;

    let combined = RevenueCorrelationPipeline::combine(&financials, summaries);
    let pipeline = RevenueCorrelationPipeline::new(config.regression);
    let report = match pipeline.correlate(&combined) {
        Ok(report) => report,
        Err(PipelineError::InsufficientData { needed, found }) => {
            tracing::warn!(
                "Not enough data points for correlation analysis ({found} < {needed}); skipping"
            );
            output::save_combined_table(config, &combined)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    output::save_correlation_outputs(config, &report)?;

    println!("\n--- Correlation Matrix (Revenue vs Sentiment) ---");
    let width = report.matrix.labels.iter().map(String::len).max().unwrap_or(0);
    print!("{:width$}", "");
    for label in &report.matrix.labels {
        print!("  {label:>width$}");
    }
    println!();
    for (label, row) in report.matrix.labels.iter().zip(&report.matrix.values) {
        print!("{label:<width$}");
        for value in row {
            print!("  {value:>width$.4}");
        }
        println!();
    }

    if let Some(regression) = &report.regression {
        println!(
            "\n--- Linear Regression (fitted on {} data points) ---",
            regression.train_rows
        );
        println!("Coefficients: {:?}", regression.fit.coefficients);
        println!("Intercept: {}", regression.fit.intercept);
        println!("Mean Squared Error: {}", regression.mse);
        println!("R-Squared: {}", regression.r2);
    }
    Ok(())
}
