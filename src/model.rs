//! Provider selection and model name resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::RoomGenError;

/// Supported image-generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// `OpenAI` Images API.
    OpenAi,
    /// Together Images API (FLUX family).
    Together,
}

/// Short name aliases for popular models.
const ALIASES: &[(&str, &str)] = &[
    ("gpt-1", "gpt-image-1"),
    ("gpt-1-mini", "gpt-image-1-mini"),
    ("flux-dev", "black-forest-labs/FLUX.1-dev"),
    ("flux-schnell", "black-forest-labs/FLUX.1-schnell"),
    ("flux-pro", "black-forest-labs/FLUX.1.1-pro"),
];

impl Provider {
    /// Human-readable provider name used in messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Together => "Together",
        }
    }

    /// Environment variable holding this provider's API key.
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Together => "TOGETHER_API_KEY",
        }
    }

    /// Model used when nothing else is configured.
    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-image-1",
            Self::Together => "black-forest-labs/FLUX.1-dev",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenAi => "openai",
            Self::Together => "together",
        })
    }
}

impl FromStr for Provider {
    type Err = RoomGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "together" => Ok(Self::Together),
            _ => Err(RoomGenError::InvalidInput(format!(
                "Unknown provider '{s}'. Expected 'openai' or 'together'."
            ))),
        }
    }
}

/// Resolve a model name (alias or exact) to the full model identifier.
#[must_use]
pub fn resolve_model(name: &str) -> String {
    ALIASES
        .iter()
        .find(|&&(alias, _)| alias == name)
        .map_or_else(|| name.to_string(), |&(_, full)| full.to_string())
}
