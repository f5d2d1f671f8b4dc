//! Unified error type for roomgen.

use thiserror::Error;

/// Broad classification of a [`RoomGenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or unusable configuration; raised before any request.
    Configuration,
    /// A caller-supplied value violates an input constraint.
    InvalidInput,
    /// The external image API failed or answered with something unusable.
    Backend,
    /// Local filesystem or payload decoding failure.
    Io,
}

/// Errors that can occur while composing, generating, or saving room images.
#[derive(Debug, Error)]
pub enum RoomGenError {
    /// No API key configured for the selected provider.
    #[error("Missing API key for {provider}. Set {env_var}, pass --api-key, or add it to the config file.")]
    MissingApiKey {
        /// The provider name.
        provider: String,
        /// The environment variable consulted for the key.
        env_var: String,
    },

    /// Configuration file or cassette could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid caller input (size string, variation count, provider name).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backend call failed: transport, non-success status, or malformed body.
    #[error(
        "{provider} backend error{}: {message}",
        .status.as_ref().map_or_else(String::new, |s| format!(" ({s})"))
    )]
    Backend {
        /// The provider that failed.
        provider: String,
        /// HTTP status code, when the failure came with one.
        status: Option<u16>,
        /// Underlying cause.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A returned payload could not be decoded from base64.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl RoomGenError {
    /// Build a [`RoomGenError::Backend`] without an HTTP status.
    pub fn backend(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend { provider: provider.into(), status: None, message: message.into() }
    }

    /// Wrap a transport error from the HTTP client.
    pub fn transport(provider: impl Into<String>, err: &reqwest::Error) -> Self {
        Self::Backend {
            provider: provider.into(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey { .. } | Self::Config(_) => ErrorKind::Configuration,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Backend { .. } => ErrorKind::Backend,
            Self::Io(_) | Self::Decode(_) => ErrorKind::Io,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoomGenError>;
