//! Errors raised while loading suggestion files

use std::path::PathBuf;
use thiserror::Error;

/// Suggestion loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON suggestion list
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV suggestion list
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed TOML suggestion list
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A suggestion without a target URL (1-based entry number)
    #[error("Suggestion {0} has no target URL")]
    MissingTarget(usize),
}
