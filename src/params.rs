//! Request parameter parsing: image size and variation count.

use std::fmt;
use std::str::FromStr;

use crate::error::RoomGenError;

/// Size choices offered by the front-end.
pub const PRESET_SIZES: &[&str] = &["1024x1024", "768x768", "512x512"];

/// Pixel dimensions parsed from a `"WxH"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FromStr for ImageSize {
    type Err = RoomGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parse a size string of the form `"{width}x{height}"`.
///
/// The separator is a lowercase `x`; both halves must be positive base-10
/// integers with no sign or padding.
///
/// # Errors
///
/// Returns [`RoomGenError::InvalidInput`] if the string is not exactly two
/// positive integers separated by one `x`.
pub fn parse_size(size: &str) -> Result<ImageSize, RoomGenError> {
    let invalid = || {
        RoomGenError::InvalidInput(format!(
            "Malformed size '{size}'. Expected WIDTHxHEIGHT with positive integers, e.g. 1024x1024"
        ))
    };

    let mut halves = size.split('x');
    let (Some(w), Some(h), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(invalid());
    };

    let width = parse_dimension(w).ok_or_else(invalid)?;
    let height = parse_dimension(h).ok_or_else(invalid)?;
    Ok(ImageSize { width, height })
}

fn parse_dimension(token: &str) -> Option<u32> {
    // u32::from_str accepts a leading '+', which is not a valid size token.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().filter(|&v| v > 0)
}

/// Validate the number of requested variations.
///
/// # Errors
///
/// Returns [`RoomGenError::InvalidInput`] if `count` is zero.
pub fn validate_count(count: u32) -> Result<(), RoomGenError> {
    if count == 0 {
        Err(RoomGenError::InvalidInput("Variation count must be at least 1".to_string()))
    } else {
        Ok(())
    }
}
