//! Port traits defining external boundaries.
//!
//! Implementations live in `src/adapters/`.

pub mod image_generator;

pub use image_generator::{GenerateFuture, ImageGenerator, ImageRequest, ImageResponse};
