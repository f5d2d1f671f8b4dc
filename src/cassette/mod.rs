//! Record/replay of backend interactions.
//!
//! A cassette is a YAML file holding every request a generator received and
//! the result it produced, so the binary can be driven end to end offline.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
