/*!
 * File and image payload utilities.
 *
 * Handles the base64 data-URL convention used for image payloads, resolution
 * of file references (local path or raw bytes), and retrieval of remote
 * documents by URL.
 */

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::info;
use url::Url;

use crate::errors::GatewayError;

/// MIME type for JPEG images, the only image format accepted on upload.
pub const MIME_JPEG: &str = "image/jpeg";

/// Data-URL prefix prepended to base64 image payloads sent to vision APIs.
pub const BASE64_JPEG_PREFIX: &str = "data:image/jpeg;base64,";

/// Prepend the JPEG data-URL prefix unless the payload already carries one.
pub fn format_base64_image(base64: &str) -> String {
    if base64.starts_with("data:") {
        base64.to_string()
    } else {
        format!("{BASE64_JPEG_PREFIX}{base64}")
    }
}

/// Strip a `data:<mime>;base64,` prefix if present, returning the raw base64.
pub fn strip_base64_prefix(payload: &str) -> &str {
    if payload.starts_with("data:") {
        match payload.find(";base64,") {
            Some(index) => &payload[index + ";base64,".len()..],
            None => payload,
        }
    } else {
        payload
    }
}

/// Encode raw bytes as standard base64.
pub fn encode_bytes_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// A file handed to the gateway, either as a path on disk or as an
/// in-memory buffer (the multipart upload case).
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Path to a file on the local filesystem
    Path(PathBuf),
    /// Raw file bytes
    Bytes(Vec<u8>),
}

impl FileSource {
    /// Resolve the source to its byte content.
    ///
    /// An unreadable path maps to `UnsupportedInput`, keeping the message
    /// shown to callers independent of filesystem details.
    pub fn resolve(&self) -> Result<Vec<u8>, GatewayError> {
        match self {
            Self::Path(path) => Ok(std::fs::read(path)?),
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Resolve the source and encode it as base64.
    pub fn resolve_base64(&self) -> Result<String, GatewayError> {
        Ok(encode_bytes_base64(&self.resolve()?))
    }
}

/// Whether the string is an http(s) URL.
pub fn is_url(location: &str) -> bool {
    match Url::parse(location) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

/// Fetch a document from an http(s) URL or read it from a local path.
///
/// URL fetch failures carry the transport status back to the caller; local
/// read failures map to `UnsupportedInput` like any other unreadable file
/// reference.
pub async fn fetch_document(location: &str) -> Result<Vec<u8>, GatewayError> {
    if is_url(location) {
        info!("Fetching document from URL: {}", location);
        let response = reqwest::get(location)
            .await
            .map_err(|e| GatewayError::Retrieval(e.to_string()))?;
        if !response.status().is_success() {
            return Err(GatewayError::Retrieval(response.status().to_string()));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Retrieval(e.to_string()))?;
        Ok(bytes.to_vec())
    } else {
        Ok(std::fs::read(location)?)
    }
}
