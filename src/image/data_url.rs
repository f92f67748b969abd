//! Building and decoding `data:<mime>;base64,<payload>` strings.

use crate::{Error, Result};
use base64::Engine as _;

/// Fallback for responses that omit the inline data MIME type.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Build a data URL from a MIME type and an already-encoded base64 payload.
pub fn encode(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_payload)
}

/// Decode a data URL back into its MIME type and raw bytes.
pub fn decode(data_url: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidData("missing data: prefix".to_string()))?;

    let (mime_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| Error::InvalidData("missing ;base64, separator".to_string()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::InvalidData(format!("base64 decode failed: {}", e)))?;

    Ok((mime_type.to_string(), bytes))
}

/// File extension for a handful of image MIME types the model is known to
/// return. Unknown types fall back to `png`.
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}
