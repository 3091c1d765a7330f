//! Saving blobs to the user's disk through a synthetic anchor element.

use log::debug;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement};

use crate::glue::bytes_to_blob;
use crate::object_url::ObjectUrl;

/// How long a clicked download keeps its object URL registered, in
/// milliseconds.
///
/// The save flow reads from the URL after the click handler returns, so
/// revoking synchronously would hand it a dead URL on some hosts.
pub const DEFAULT_REVOKE_DELAY_MS: u32 = 200;

/// Tuning knobs for [`download_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Delay before the object URL is revoked, in milliseconds.
    pub revoke_delay_ms: u32,
}

impl DownloadOptions {
    /// Options with the default revocation delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the revocation delay.
    pub fn with_revoke_delay_ms(mut self, revoke_delay_ms: u32) -> Self {
        self.revoke_delay_ms = revoke_delay_ms;
        self
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            revoke_delay_ms: DEFAULT_REVOKE_DELAY_MS,
        }
    }
}

/// Offer `blob` to the user as a file download named `name`.
///
/// Creates an anchor element with the `download` attribute set, points it
/// at an object URL for the blob, clicks it and detaches it again. The
/// URL is revoked [`DEFAULT_REVOKE_DELAY_MS`] later. Whether the user
/// accepts or cancels the save dialog is not observable from here.
#[wasm_bindgen]
pub fn download(name: &str, blob: &Blob) -> Result<(), JsValue> {
    download_with(name, blob, DownloadOptions::default())
}

/// [`download`] with explicit [`DownloadOptions`].
pub fn download_with(name: &str, blob: &Blob, options: DownloadOptions) -> Result<(), JsValue> {
    let url = ObjectUrl::new(blob)?;
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| JsError::new("Document has no body"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsError::new("Not an anchor element"))?;
    anchor.set_download(name);
    anchor.set_href(&url);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    debug!("Triggered download of {:?} ({} bytes)", name, blob.size());

    // Old Edge invalidates the URL synchronously on revoke, racing the save
    // flow. Keep it registered for a moment after the click.
    url.revoke_later(options.revoke_delay_ms)
}

/// Offer raw bytes to the user as a file download named `name`.
pub fn download_bytes(name: &str, bytes: &[u8], mime_type: &str) -> Result<(), JsValue> {
    let blob = bytes_to_blob(bytes, mime_type)?;
    download(name, &blob)
}

fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsError::new("Failed to get window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsError::new("Failed to get document"))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::{DownloadOptions, DEFAULT_REVOKE_DELAY_MS};

    #[test]
    fn default_revoke_delay() {
        assert_eq!(DownloadOptions::new().revoke_delay_ms, DEFAULT_REVOKE_DELAY_MS);
        assert_eq!(DEFAULT_REVOKE_DELAY_MS, 200);
    }

    #[test]
    fn revoke_delay_override() {
        let options = DownloadOptions::new().with_revoke_delay_ms(1000);
        assert_eq!(options.revoke_delay_ms, 1000);
    }
}
