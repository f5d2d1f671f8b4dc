//! Live adapter for the Together Images API (FLUX family).

use reqwest::Client;

use super::{post_generation, require_key};
use crate::error::RoomGenError;
use crate::model::Provider;
use crate::params::{parse_size, validate_count};
use crate::ports::image_generator::{check_count, GenerateFuture, ImageGenerator, ImageRequest};

const TOGETHER_API_BASE: &str = "https://api.together.xyz";

/// Sampling steps sent with every request. 24-30 suits interiors.
pub const SAMPLING_STEPS: u32 = 28;

/// Live Together image generator.
///
/// Together takes explicit `width`/`height`, so the size string is parsed
/// locally and a malformed one fails before any request is sent.
pub struct TogetherGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl TogetherGenerator {
    /// Create a generator for `model` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::MissingApiKey`] if the key is empty.
    pub fn new(api_key: String, model: impl Into<String>) -> Result<Self, RoomGenError> {
        let api_key = require_key(Provider::Together, api_key)?;
        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: TOGETHER_API_BASE.to_string(),
        })
    }

    /// Point the generator at a different API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ImageGenerator for TogetherGenerator {
    fn name(&self) -> &str {
        Provider::Together.label()
    }

    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let size = parse_size(&request.size)?;
            validate_count(request.count)?;

            let body = serde_json::json!({
                "model": self.model,
                "prompt": request.prompt,
                "width": size.width,
                "height": size.height,
                "steps": SAMPLING_STEPS,
                "n": request.count,
                "response_format": "b64_json",
            });

            let url = format!("{}/v1/images/generations", self.base_url.trim_end_matches('/'));
            let response =
                post_generation(&self.client, Provider::Together, &url, &self.api_key, &body)
                    .await?;

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
