//! Report output settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// File format of the metrics table and chart datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Csv,
    Json,
}

impl DatasetFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DatasetFormat::Csv => "csv",
            DatasetFormat::Json => "json",
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where and how the report is written.
///
/// Stored as a JSON object on disk; every key is optional:
/// ```json
/// {
///   "output_dir": "charts",
///   "format": "csv",
///   "top_n": 15,
///   "spacing_top_n": 20
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub format: DatasetFormat,
    /// Length of the speed and transport-hub rankings.
    pub top_n: usize,
    /// Length of each stop-spacing ranking (express and local).
    pub spacing_top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("charts"),
            format: DatasetFormat::Csv,
            top_n: 15,
            spacing_top_n: 20,
        }
    }
}

impl ReportConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report config '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("invalid report config '{path}'"))
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Path of a dataset file named `stem` in the configured format.
    pub fn dataset_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}.{}", self.format.extension()))
    }
}
