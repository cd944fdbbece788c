//! Error types for Heart Card

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Heart Card operations.
///
/// The card itself has no failure modes; every variant comes from loading
/// configuration.
#[derive(Error, Debug)]
pub enum CardError {
    /// Config file could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`crate::CardConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Heart Card operations
pub type Result<T> = std::result::Result<T, CardError>;
