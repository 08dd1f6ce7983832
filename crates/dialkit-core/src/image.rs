//! Image source helpers for pointer artwork.

use crate::Size;

/// Footprint used when an image's natural size cannot be determined.
pub const FALLBACK_IMAGE_SIZE: Size = Size::new(20.0, 80.0);

const DATA_IMAGE_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";
const SUPPORTED_TYPES: [&str; 5] = ["png", "jpg", "jpeg", "gif", "svg+xml"];

/// Check whether `src` is a base64 data URI of a supported image type
/// (`png`, `jpg`, `jpeg`, `gif`, `svg+xml`).
#[must_use]
pub fn is_valid_base64_image(src: &str) -> bool {
    data_uri_subtype(src).is_some()
}

/// Image subtype of a base64 data URI, e.g. `"svg+xml"`.
#[must_use]
pub fn data_uri_subtype(src: &str) -> Option<&str> {
    let rest = src.strip_prefix(DATA_IMAGE_PREFIX)?;
    let (subtype, _) = rest.split_once(BASE64_MARKER)?;
    SUPPORTED_TYPES.contains(&subtype).then_some(subtype)
}

/// Size to draw an image at.
///
/// Uses the configured size when both dimensions are positive, otherwise the
/// natural size when known, otherwise [`FALLBACK_IMAGE_SIZE`].
#[must_use]
pub fn resolve_image_size(configured: Size, natural: Option<Size>) -> Size {
    if configured.width > 0.0 && configured.height > 0.0 {
        return configured;
    }
    match natural {
        Some(size) if size.width > 0.0 && size.height > 0.0 => size,
        _ => FALLBACK_IMAGE_SIZE,
    }
}
