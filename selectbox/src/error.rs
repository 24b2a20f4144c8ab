//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading a select configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid select configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("option {index} has an empty value")]
    EmptyOption { index: usize },
}
