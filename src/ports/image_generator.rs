//! Image generator port: the uniform contract over every backend.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::RoomGenError;

/// A backend-agnostic request to generate images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The composed prompt.
    pub prompt: String,
    /// Target size as `"WxH"`, e.g. `"1024x1024"`.
    pub size: String,
    /// Number of variations to request.
    pub count: u32,
}

/// Uniform result: base64 payloads in the order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Base64-encoded images (`b64_json` convention).
    pub images: Vec<String>,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ImageResponse, RoomGenError>> + Send + 'a>>;

/// Generates images from text prompts via an external API.
///
/// Each implementation owns its credential, model, and HTTP client and sends
/// exactly one request per call.
pub trait ImageGenerator: Send + Sync {
    /// Provider name for logs and error messages.
    fn name(&self) -> &str;

    /// Generate images for the given request.
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_>;

    /// Generate `n` images of `size` for `prompt`.
    fn generate_image(&self, prompt: &str, size: &str, n: u32) -> GenerateFuture<'_> {
        let request =
            ImageRequest { prompt: prompt.to_string(), size: size.to_string(), count: n };
        self.generate(&request)
    }
}

/// Log a warning when a backend returns a different number of images than requested.
///
/// The response is still passed through unchanged.
pub(crate) fn check_count(provider: &str, requested: u32, response: &ImageResponse) {
    let returned = response.images.len();
    if usize::try_from(requested).ok() != Some(returned) {
        tracing::warn!(provider, requested, returned, "backend returned an unexpected image count");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl ImageGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
            let request = request.clone();
            Box::pin(async move {
                Ok(ImageResponse {
                    images: (0..request.count).map(|i| format!("{}-{i}", request.size)).collect(),
                })
            })
        }
    }

    #[tokio::test]
    async fn generate_image_builds_request() {
        let response = Echo.generate_image("a room", "512x512", 2).await.unwrap();
        assert_eq!(response.images, vec!["512x512-0", "512x512-1"]);
    }

    #[test]
    fn image_response_serialization() {
        let response = ImageResponse { images: vec!["aGVsbG8=".into(), "d29ybGQ=".into()] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"images":["aGVsbG8=","d29ybGQ="]}"#);
        let back: ImageResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
