//! Decoding generated images and writing them to disk.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::RoomGenError;

/// Decode one base64 payload from the uniform result.
///
/// # Errors
///
/// Returns [`RoomGenError::Decode`] naming the 1-based image index if the
/// payload is not valid base64.
pub fn decode_image(index: usize, b64: &str) -> Result<Vec<u8>, RoomGenError> {
    base64::engine::general_purpose::STANDARD
        .decode(b64.trim())
        .map_err(|e| RoomGenError::Decode(format!("Image {index} is not valid base64: {e}")))
}

/// File extension for image bytes, sniffed from their magic number.
///
/// Falls back to `png` when the format is not recognized.
#[must_use]
pub fn sniff_extension(data: &[u8]) -> &'static str {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Jpeg) => "jpg",
        Ok(image::ImageFormat::WebP) => "webp",
        _ => "png",
    }
}

/// Sanitize a string for use in a filename.
///
/// Lowercases, replaces runs of non-alphanumeric characters with a single
/// hyphen, and trims to `max_len`.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true;

    for ch in input.chars() {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "room".to_string()
    } else {
        result
    }
}

/// Download filename: `roomgen_{style}_{room_type}_{index}.{ext}`.
#[must_use]
pub fn image_filename(style: &str, room_type: &str, index: usize, ext: &str) -> String {
    format!(
        "roomgen_{}_{}_{index}.{ext}",
        sanitize_for_filename(style, 40),
        sanitize_for_filename(room_type, 40)
    )
}

/// Decode every image and write it into `dir`, returning the written paths in order.
///
/// # Errors
///
/// Returns an error if a payload cannot be decoded or a file cannot be written.
/// Nothing is written if any payload fails to decode.
pub fn save_images(
    images: &[String],
    dir: &Path,
    style: &str,
    room_type: &str,
) -> Result<Vec<PathBuf>, RoomGenError> {
    let decoded = images
        .iter()
        .enumerate()
        .map(|(i, b64)| decode_image(i + 1, b64))
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(decoded.len());
    for (i, data) in decoded.iter().enumerate() {
        let path = dir.join(image_filename(style, room_type, i + 1, sniff_extension(data)));
        std::fs::write(&path, data)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "image written");
        paths.push(path);
    }
    Ok(paths)
}
