//! Adapter implementations for port traits.
//!
//! - `live/`: real API implementations (`OpenAI`, Together)
//! - `recording/`: wrap a live adapter and capture its interactions
//! - `replaying/`: serve captured interactions without network access

pub mod live;
pub mod recording;
pub mod replaying;
