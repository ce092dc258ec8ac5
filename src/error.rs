use std::path::PathBuf;

use thiserror::Error;

/// Failures reading profiles or progress history from disk.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported history format for {} (expected .json or .csv)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("No data available")]
    NoData,
}
