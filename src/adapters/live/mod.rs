//! Live adapters that call real image-generation APIs.
//!
//! Both supported backends speak the same `images/generations` response
//! shape (`{"data": [{"b64_json": ...}]}`), so posting and response parsing
//! are shared here; each adapter only builds its own request body.

pub mod openai;
pub mod together;

use reqwest::Client;
use serde::Deserialize;

use crate::error::RoomGenError;
use crate::model::Provider;
use crate::ports::ImageResponse;

/// Longest slice of a response body quoted back in an error.
const MAX_BODY_IN_ERROR: usize = 500;

/// Reject empty or whitespace-only credentials before any client is built.
pub(crate) fn require_key(provider: Provider, api_key: String) -> Result<String, RoomGenError> {
    if api_key.trim().is_empty() {
        return Err(RoomGenError::MissingApiKey {
            provider: provider.label().to_string(),
            env_var: provider.env_var().to_string(),
        });
    }
    Ok(api_key)
}

/// POST a JSON body with bearer auth and normalize the `data[].b64_json` response.
pub(crate) async fn post_generation(
    client: &Client,
    provider: Provider,
    url: &str,
    api_key: &str,
    body: &serde_json::Value,
) -> Result<ImageResponse, RoomGenError> {
    let label = provider.label();
    tracing::debug!(provider = label, url, "sending image generation request");

    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| RoomGenError::transport(label, &e))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| RoomGenError::transport(label, &e))?;

    if !status.is_success() {
        return Err(RoomGenError::Backend {
            provider: label.to_string(),
            status: Some(status.as_u16()),
            message: truncate(&text),
        });
    }

    parse_images(label, &text)
}

/// Extract each item's base64 payload, preserving order.
pub(crate) fn parse_images(provider: &str, text: &str) -> Result<ImageResponse, RoomGenError> {
    let parsed: GenerationResponse = serde_json::from_str(text).map_err(|e| {
        RoomGenError::backend(provider, format!("Failed to parse response: {e}"))
    })?;

    let images = parsed
        .data
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.b64_json.ok_or_else(|| {
                RoomGenError::backend(provider, format!("Response item {i} has no b64_json payload"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ImageResponse { images })
}

fn truncate(text: &str) -> String {
    if text.len() <= MAX_BODY_IN_ERROR {
        return text.to_string();
    }
    let mut end = MAX_BODY_IN_ERROR;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[derive(Deserialize)]
struct GenerationResponse {
    data: Vec<GeneratedItem>,
}

#[derive(Deserialize)]
struct GeneratedItem {
    b64_json: Option<String>,
}
