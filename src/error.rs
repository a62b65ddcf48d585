//! Error types for configuration loading.
//!
//! Pointer handling itself never fails: out-of-range coordinates and dead
//! elements resolve to "no activity". Errors only surface at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a [`crate::config::LayoutConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of its valid range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// No configuration directory could be determined for this platform
    #[error("No configuration directory available")]
    NoConfigDir,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
