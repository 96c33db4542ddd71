//! Failures of the application around the calculation: usage, config and logging.
//!
//! Refused tuning requests are not errors here; they are `TuningError`s and
//! are rendered to the operator like any other result.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad command line
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Logging(String),
}
