//! On-disk cassette format.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RoomGenError;

/// A recorded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Session name, usually `<timestamp>-<port>`.
    pub name: String,
    /// When the recording was written.
    pub recorded_at: DateTime<Utc>,
    /// Source revision the recording was made from.
    pub commit: String,
    /// Interactions in recording order.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// One call through a port.
///
/// `output` is `{"Ok": <value>}` for a success or `{"Err": "<message>"}`
/// for a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the whole recording.
    pub seq: u64,
    /// Port name, e.g. `image_generator`.
    pub port: String,
    /// Method name, e.g. `generate`.
    pub method: String,
    /// Serialized request.
    #[serde(default)]
    pub input: serde_json::Value,
    /// Serialized result.
    pub output: serde_json::Value,
}

impl Cassette {
    /// Read and parse a cassette file.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RoomGenError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RoomGenError::Config(format!("Failed to read cassette {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            RoomGenError::Config(format!("Failed to parse cassette {}: {e}", path.display()))
        })
    }

    /// Serialize and write the cassette, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, yaml)
    }
}
