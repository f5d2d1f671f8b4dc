//! Replaying adapter for the `ImageGenerator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::CassetteReplayer;
use crate::error::RoomGenError;
use crate::model::Provider;
use crate::params::{parse_size, validate_count};
use crate::ports::image_generator::{GenerateFuture, ImageGenerator, ImageRequest, ImageResponse};

const REPLAY: &str = "Replay";

/// Serves recorded generation results; never touches the network.
///
/// Requests are validated the way the live adapter for `provider` validates
/// them, so a request the live backend would reject never consumes a
/// recorded interaction.
pub struct ReplayingImageGenerator {
    replayer: Arc<Mutex<CassetteReplayer>>,
    provider: Provider,
}

impl ReplayingImageGenerator {
    /// Create a replaying generator backed by `replayer`, standing in for `provider`.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>, provider: Provider) -> Self {
        Self { replayer, provider }
    }
}

impl ImageGenerator for ReplayingImageGenerator {
    fn name(&self) -> &str {
        REPLAY
    }

    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            if self.provider == Provider::Together {
                parse_size(&request.size)?;
            }
            validate_count(request.count)?;

            tracing::debug!(
                provider = %self.provider,
                prompt_len = request.prompt.len(),
                "replaying image generation"
            );
            next_output(&self.replayer, "image_generator", "generate")
                .and_then(replay_result::<ImageResponse>)
                .map_err(|message| RoomGenError::backend(REPLAY, message))
        })
    }
}
