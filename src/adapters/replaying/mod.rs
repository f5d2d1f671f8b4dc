//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::CassetteReplayer;

/// Take the next recorded output for `port`/`method`.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, String> {
    let mut guard = replayer.lock().map_err(|e| format!("Replayer lock poisoned: {e}"))?;
    let interaction = guard.next_interaction(port, method)?;
    tracing::debug!(port, method, remaining = guard.remaining(), "served recorded interaction");
    Ok(interaction.output)
}

/// Decode a recorded output written with the `Ok`/`Err` convention.
///
/// A recorded `Err` comes back as `Err(message)`; a bare value is treated as
/// a success.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, String> {
    if let Some(err) = output.get("Err") {
        return Err(err.as_str().unwrap_or("replayed error").to_string());
    }
    let value = match output.get("Ok") {
        Some(ok) => ok.clone(),
        None => output,
    };
    serde_json::from_value(value).map_err(|e| format!("Malformed recorded output: {e}"))
}
