use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::PipelineConfig;

#[derive(Parser, Debug)]
#[command(name = "review-sentiment")]
#[command(about = "Movie review sentiment classifier and revenue correlation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a review dump and write detailed and summary tables
    Analyze(AnalyzeArgs),

    /// Decode an OMDb ratings list and print it as JSON
    Ratings {
        /// Ratings cell, e.g. "[{'Source': 'Metacritic', 'Value': '75/100'}]"
        input: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Review dump with `=== Reviews for <Title> ===` blocks
    pub reviews: PathBuf,

    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "REVIEW_SENTIMENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Movie financial CSV; enables the revenue correlation step
    #[arg(long)]
    pub revenue: Option<PathBuf>,

    /// VADER-format lexicon file replacing the built-in word valences
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Skip the JSON report
    #[arg(long)]
    pub no_json: bool,

    /// Fraction of joined rows held out when scoring the regression
    #[arg(long)]
    pub holdout: Option<f64>,

    /// Seed for the holdout shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AnalyzeArgs {
    /// Layers command-line flags over a loaded (or default) config.
    pub fn apply(&self, mut config: PipelineConfig) -> Result<PipelineConfig, String> {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_json {
            config.write_json = false;
        }
        if let Some(holdout) = self.holdout {
            config.regression.holdout_fraction = Some(holdout);
        }
        if let Some(seed) = self.seed {
            config.regression.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}
