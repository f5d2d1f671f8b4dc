//! Service context: picks and builds the image generator for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::openai::OpenAiGenerator;
use crate::adapters::live::together::TogetherGenerator;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::cassette::{Cassette, CassetteRecorder, CassetteReplayer};
use crate::config::Credentials;
use crate::error::RoomGenError;
use crate::model::Provider;
use crate::ports::ImageGenerator;

/// Directory recordings are written under, one timestamped folder per run.
pub const CASSETTE_DIR: &str = ".roomgen/cassettes";

/// Holds the generator selected for this run.
pub struct ServiceContext {
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
}

/// Handle to an active recording; call [`RecordingSession::finish`] after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Write the cassette to disk and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, RoomGenError> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| RoomGenError::Config("Recorder is still in use".to_string()))?
            .into_inner()
            .map_err(|e| RoomGenError::Config(format!("Recorder lock poisoned: {e}")))?;
        if recorder.is_empty() {
            tracing::warn!("recording finished with no interactions");
        }
        tracing::debug!(interactions = recorder.len(), "finishing recording");
        Ok(recorder.finish()?)
    }
}

impl ServiceContext {
    /// Build the live adapter for `credentials.provider`.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::MissingApiKey`] if no usable key was resolved.
    pub fn live(credentials: &Credentials) -> Result<Self, RoomGenError> {
        let provider = credentials.provider;
        let key = credentials.api_key.clone().ok_or_else(|| RoomGenError::MissingApiKey {
            provider: provider.label().to_string(),
            env_var: provider.env_var().to_string(),
        })?;

        tracing::debug!(%provider, model = %credentials.model, "building live generator");
        let generator: Box<dyn ImageGenerator> = match provider {
            Provider::OpenAi => Box::new(OpenAiGenerator::new(key, credentials.model.clone())?),
            Provider::Together => {
                Box::new(TogetherGenerator::new(key, credentials.model.clone())?)
            }
        };
        Ok(Self { generator })
    }

    /// Build the live adapter wrapped in a recorder writing under `cassette_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the live adapter cannot be built.
    pub fn recording(
        credentials: &Credentials,
        cassette_dir: &Path,
    ) -> Result<(Self, RecordingSession), RoomGenError> {
        let live = Self::live(credentials)?;
        Ok(Self::record(live.generator, cassette_dir, &credentials.provider.to_string()))
    }

    /// Wrap `generator` so each call lands in a new timestamped cassette
    /// under `cassette_dir`.
    #[must_use]
    pub fn record(
        generator: Box<dyn ImageGenerator>,
        cassette_dir: &Path,
        label: &str,
    ) -> (Self, RecordingSession) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = cassette_dir.join(&timestamp).join("image_generator.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-{label}"),
            commit_hash(),
        )));

        let generator = RecordingImageGenerator::new(generator, Arc::clone(&recorder));
        (Self { generator: Box::new(generator) }, RecordingSession { recorder })
    }

    /// Serve results from the cassette at `path` in place of `provider`; no
    /// key is needed.
    ///
    /// # Errors
    ///
    /// Returns [`RoomGenError::Config`] if the cassette cannot be loaded.
    pub fn replaying(path: &Path, provider: Provider) -> Result<Self, RoomGenError> {
        let cassette = Cassette::load(path)?;
        tracing::debug!(
            name = %cassette.name,
            interactions = cassette.interactions.len(),
            "replaying cassette"
        );
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        Ok(Self { generator: Box::new(ReplayingImageGenerator::new(replayer, provider)) })
    }
}

/// Current git commit hash, or `"unknown"` outside a checkout.
fn commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
