//! Error type shared by the loader and the summary aggregator.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed as JSON but the top-level value is not an array of records.
    #[error("route data must be a JSON array of records, found {found}")]
    NotASequence { found: &'static str },

    /// Aggregation was asked to summarize zero routes.
    #[error("no eligible routes to summarize")]
    EmptyInput,
}
