use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{PipelineError, Result};

/// Settings for one pipeline run. Every field has a default, so a config
/// file only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub detailed_csv: String,
    pub summary_csv: String,
    pub summary_txt: String,
    pub report_json: String,
    pub write_json: bool,
    pub correlation_csv: String,
    pub combined_csv: String,
    pub regression: RegressionOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            detailed_csv: "sentiment_detailed_results.csv".to_string(),
            summary_csv: "sentiment_summary_table.csv".to_string(),
            summary_txt: "sentiment_summary.txt".to_string(),
            report_json: "sentiment_report.json".to_string(),
            write_json: true,
            correlation_csv: "correlation_matrix.csv".to_string(),
            combined_csv: "combined_movie_sentiment_data.csv".to_string(),
            regression: RegressionOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionOptions {
    /// Share of joined rows held out for evaluation. `None` fits and
    /// evaluates on every row.
    pub holdout_fraction: Option<f64>,
    pub seed: u64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            holdout_fraction: None,
            seed: 42,
        }
    }
}

impl PipelineConfig {
    /// Reads a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let config = Self::from_toml_str(&contents).map_err(|message| PipelineError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(fraction) = self.regression.holdout_fraction {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(format!(
                    "regression.holdout_fraction must be in (0, 1), got {fraction}"
                ));
            }
        }
        Ok(())
    }

    pub fn detailed_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.detailed_csv)
    }

    pub fn summary_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_csv)
    }

    pub fn summary_txt_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_txt)
    }

    pub fn report_json_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_json)
    }

    pub fn correlation_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.correlation_csv)
    }

    pub fn combined_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.combined_csv)
    }
}
