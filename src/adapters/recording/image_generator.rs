//! Recording adapter for the `ImageGenerator` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::CassetteRecorder;
use crate::ports::image_generator::{GenerateFuture, ImageGenerator, ImageRequest};

/// Delegates to an inner generator and records every request and result.
pub struct RecordingImageGenerator {
    inner: Box<dyn ImageGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageGenerator {
    /// Wrap `inner`, writing interactions into `recorder`.
    pub fn new(inner: Box<dyn ImageGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageGenerator for RecordingImageGenerator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.generate(&request).await;
            record_result(&self.recorder, "image_generator", "generate", &request, &result);
            result
        })
    }
}
