//! Roomgen - text to furnished-room images.
//!
//! Two layers do the real work:
//!
//! - [`prompt`] turns structured design fields and a style preset into one
//!   deterministic prompt string.
//! - [`ports::ImageGenerator`] is the uniform contract over image backends;
//!   [`adapters::live`] implements it for `OpenAI` and Together.
//!
//! ```
//! use roomgen::prompt::{compose_prompt, RoomDesign};
//!
//! let design = RoomDesign {
//!     style: "Japandi".into(),
//!     room_type: "bedroom".into(),
//!     elements: "low bed, paper lamp".into(),
//!     materials: "ash wood".into(),
//!     palette: "earthy tones".into(),
//!     lighting: "soft daylight".into(),
//!     camera: "eye-level".into(),
//!     extra: String::new(),
//! };
//! let prompt = compose_prompt(&design);
//! assert!(prompt.starts_with("Photorealistic bedroom interior visualization. Style: Japandi, warm minimalism"));
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod output;
pub mod params;
pub mod ports;
pub mod prompt;

pub use error::{ErrorKind, Result, RoomGenError};
pub use model::Provider;
pub use ports::{ImageGenerator, ImageRequest, ImageResponse};
pub use prompt::{compose_prompt, RoomDesign};
