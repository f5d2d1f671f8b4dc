//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RoomGenError;
use crate::model::{resolve_model, Provider};

/// Environment variable naming the `OpenAI` model.
pub const OPENAI_MODEL_ENV: &str = "OPENAI_IMAGE_MODEL";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API keys per provider.
    #[serde(default)]
    pub keys: ProviderTable,

    /// Model names (or aliases) per provider.
    #[serde(default)]
    pub models: ProviderTable,

    /// Fallbacks for options not given on the command line.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// One optional string per provider.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderTable {
    /// `OpenAI` value.
    pub openai: Option<String>,
    /// Together value.
    pub together: Option<String>,
}

impl ProviderTable {
    fn get(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai.as_deref(),
            Provider::Together => self.together.as_deref(),
        }
    }
}

/// Default option values.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Provider name (`openai` or `together`).
    pub provider: String,
    /// Image size as `WxH`.
    pub size: String,
    /// Variations per request.
    pub count: u32,
    /// Style preset key or free text.
    pub style: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            provider: "together".to_string(),
            size: "1024x1024".to_string(),
            count: 1,
            style: "Scandinavian".to_string(),
        }
    }
}

/// Everything needed to construct one provider's adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Selected backend.
    pub provider: Provider,
    /// API key, if one was found anywhere.
    pub api_key: Option<String>,
    /// Fully resolved model identifier.
    pub model: String,
}

impl Config {
    /// Load configuration from `path`, or return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::Config`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RoomGenError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RoomGenError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            RoomGenError::Config(format!("Failed to parse config {}: {e}", path.display()))
        })
    }

    /// Resolve the key and model for `provider` from the process environment.
    ///
    /// Key precedence: `key_override`, then the provider's env var, then the
    /// file. Model precedence: `model_override`, then `OPENAI_IMAGE_MODEL`
    /// (`OpenAI` only), then the file, then the provider default.
    #[must_use]
    pub fn credentials(
        &self,
        provider: Provider,
        key_override: Option<&str>,
        model_override: Option<&str>,
    ) -> Credentials {
        let env_key = std::env::var(provider.env_var()).ok();
        let env_model = match provider {
            Provider::OpenAi => std::env::var(OPENAI_MODEL_ENV).ok(),
            Provider::Together => None,
        };
        self.credentials_with(
            provider,
            key_override,
            env_key.as_deref(),
            model_override,
            env_model.as_deref(),
        )
    }

    fn credentials_with(
        &self,
        provider: Provider,
        key_override: Option<&str>,
        env_key: Option<&str>,
        model_override: Option<&str>,
        env_model: Option<&str>,
    ) -> Credentials {
        let api_key = first_non_blank(&[key_override, env_key, self.keys.get(provider)]);
        let model = first_non_blank(&[model_override, env_model, self.models.get(provider)])
            .map_or_else(|| provider.default_model().to_string(), |name| resolve_model(&name));
        Credentials { provider, api_key, model }
    }
}

/// First value that is present and not whitespace-only, trimmed.
fn first_non_blank(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `ROOMGEN_CONFIG` environment variable
/// 3. `~/.config/roomgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("ROOMGEN_CONFIG") {
        return PathBuf::from(p);
    }

    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".config/roomgen/config.toml"),
        Err(_) => PathBuf::from("roomgen.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.keys.openai.is_none());
        assert!(config.keys.together.is_none());
        assert_eq!(config.defaults.provider, "together");
        assert_eq!(config.defaults.size, "1024x1024");
        assert_eq!(config.defaults.count, 1);
        assert_eq!(config.defaults.style, "Scandinavian");
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/roomgen/config.toml")).unwrap();
        assert_eq!(config.defaults.provider, "together");
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("roomgen_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[keys]
openai = "sk-file"
together = "tg-file"

[models]
together = "flux-schnell"

[defaults]
provider = "openai"
size = "768x768"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.keys.openai.as_deref(), Some("sk-file"));
        assert_eq!(config.keys.together.as_deref(), Some("tg-file"));
        assert_eq!(config.models.together.as_deref(), Some("flux-schnell"));
        assert_eq!(config.defaults.provider, "openai");
        assert_eq!(config.defaults.size, "768x768");
        // Unset defaults keep their built-in values.
        assert_eq!(config.defaults.count, 1);
        assert_eq!(config.defaults.style, "Scandinavian");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("roomgen_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, RoomGenError::Config(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    fn config_with_file_values() -> Config {
        Config {
            keys: ProviderTable { openai: Some("sk-file".into()), together: Some("  ".into()) },
            models: ProviderTable { openai: Some("gpt-1".into()), together: None },
            ..Config::default()
        }
    }

    #[test]
    fn key_precedence() {
        let config = config_with_file_values();
        let creds =
            config.credentials_with(Provider::OpenAi, Some("sk-flag"), Some("sk-env"), None, None);
        assert_eq!(creds.api_key.as_deref(), Some("sk-flag"));

        let creds = config.credentials_with(Provider::OpenAi, None, Some("sk-env"), None, None);
        assert_eq!(creds.api_key.as_deref(), Some("sk-env"));

        let creds = config.credentials_with(Provider::OpenAi, Some(""), Some(" "), None, None);
        assert_eq!(creds.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn blank_file_key_counts_as_missing() {
        let config = config_with_file_values();
        let creds = config.credentials_with(Provider::Together, None, None, None, None);
        assert!(creds.api_key.is_none());
    }

    #[test]
    fn model_precedence_and_aliases() {
        let config = config_with_file_values();

        let creds = config.credentials_with(Provider::OpenAi, None, None, None, None);
        assert_eq!(creds.model, "gpt-image-1");

        let creds =
            config.credentials_with(Provider::OpenAi, None, None, None, Some("gpt-image-1.5"));
        assert_eq!(creds.model, "gpt-image-1.5");

        let creds = config.credentials_with(
            Provider::OpenAi,
            None,
            None,
            Some("gpt-1-mini"),
            Some("gpt-image-1.5"),
        );
        assert_eq!(creds.model, "gpt-image-1-mini");

        let creds = config.credentials_with(Provider::Together, None, None, None, None);
        assert_eq!(creds.model, "black-forest-labs/FLUX.1-dev");
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/roomgen.toml"));
        assert_eq!(path, PathBuf::from("/tmp/roomgen.toml"));
    }
}
