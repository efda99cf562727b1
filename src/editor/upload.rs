//! Image upload into `data:` URIs.
//!
//! Uploaded images are embedded into the record itself instead of being
//! stored as separate blobs. This keeps the store a plain key/value map at
//! the cost of larger records.

use super::EditorError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::Path;

/// Guess the MIME type of an image from its file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Encode bytes as a base64 `data:` URI.
pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a local image and return it as a `data:` URI.
pub async fn upload_image(path: impl AsRef<Path>) -> Result<String, EditorError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| EditorError::Upload(path.to_path_buf(), err))?;
    Ok(encode_data_uri(&bytes, mime_for(path)))
}
