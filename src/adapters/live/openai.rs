//! Live adapter for the `OpenAI` Images API.

use reqwest::Client;

use super::{post_generation, require_key};
use crate::error::RoomGenError;
use crate::model::Provider;
use crate::params::validate_count;
use crate::ports::image_generator::{check_count, GenerateFuture, ImageGenerator, ImageRequest};

const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Live `OpenAI` image generator.
///
/// The size string is forwarded as-is; the API decides which sizes it accepts.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    /// Create a generator for `model` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::MissingApiKey`] if the key is empty.
    pub fn new(api_key: String, model: impl Into<String>) -> Result<Self, RoomGenError> {
        let api_key = require_key(Provider::OpenAi, api_key)?;
        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: OPENAI_API_BASE.to_string(),
        })
    }

    /// Point the generator at a different API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ImageGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        Provider::OpenAi.label()
    }

    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            validate_count(request.count)?;

            let body = serde_json::json!({
                "model": self.model,
                "prompt": request.prompt,
                "size": request.size,
                "n": request.count,
            });

            let url = format!("{}/v1/images/generations", self.base_url.trim_end_matches('/'));
            let response =
                post_generation(&self.client, Provider::OpenAi, &url, &self.api_key, &body).await?;

            check_count(self.name(), request.count, &response);
            tracing::info!(
                provider = self.name(),
                images = response.images.len(),
                "generation complete"
            );
            Ok(response)
        })
    }
}
