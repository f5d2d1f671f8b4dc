//! Recording adapters that capture interactions to cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::CassetteRecorder;

/// Record a call and its result using the `Ok`/`Err` output convention.
///
/// Serialization or lock failures are logged and skipped; they must not
/// change the result handed back to the caller.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = match serde_json::to_value(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(port, method, "skipping recording, input not serializable: {e}");
            return;
        }
    };

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "Ok": inner }),
            Err(e) => {
                tracing::warn!(port, method, "skipping recording, output not serializable: {e}");
                return;
            }
        },
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(e) => tracing::warn!(port, method, "skipping recording, recorder lock poisoned: {e}"),
    }
}
