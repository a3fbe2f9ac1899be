//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing machine configurations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid machine configuration
    #[error("Invalid machine configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
