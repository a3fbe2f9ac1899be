//! Loading machine definitions from JSON.
//!
//! A definition is a document of the form
//! `{"initial": "<id>", "states": {"<id>": {"transitions": {"<event>": "<id>"}}}}`.
//! State order in the document is preserved. Loading does not validate the
//! graph; call [`MachineConfig::validate`] for that.

use crate::core::MachineConfig;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub mod error;

pub use error::ConfigError;

impl MachineConfig {
    /// Parse a definition from JSON text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::core::MachineConfig;
    ///
    /// let config = MachineConfig::from_json_str(r#"{
    ///     "initial": "off",
    ///     "states": {
    ///         "off": { "transitions": { "turnOn": "on" } },
    ///         "on": { "transitions": { "turnOff": "off" } }
    ///     }
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.initial, "off");
    /// assert_eq!(config.states.len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        serde_json::from_reader(reader).map_err(ConfigError::Parse)
    }

    /// Read a definition from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            initial = %config.initial,
            states = config.states.len(),
            "loaded machine configuration"
        );
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}
