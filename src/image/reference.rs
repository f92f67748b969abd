//! Loading user-selected files as reference images.

use crate::models::ReferenceImage;
use crate::Result;
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// Read a file and convert it into a [`ReferenceImage`].
///
/// Fails on unreadable files and on content that does not sniff as a known
/// image format.
pub fn load_reference(path: &Path) -> Result<ReferenceImage> {
    let bytes = fs::read(path)?;
    let format = image::guess_format(&bytes)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(
        "Loaded reference image {} ({} bytes, {})",
        name,
        bytes.len(),
        format.to_mime_type()
    );

    Ok(ReferenceImage {
        base64: base64::engine::general_purpose::STANDARD.encode(&bytes),
        mime_type: format.to_mime_type().to_string(),
        name,
    })
}
