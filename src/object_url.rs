//! Scoped ownership of `URL.createObjectURL` registrations.

use std::mem::ManuallyDrop;
use std::ops::Deref;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{window, Blob, Url};

/// An object URL addressing an in-memory [`Blob`], revoked on drop.
///
/// The host keeps the blob's bytes reachable for as long as the URL is
/// registered; a URL that is never revoked pins them until the document
/// unloads. Dropping the guard revokes exactly once, on success and
/// failure paths alike. [`ObjectUrl::revoke_later`] instead hands the URL
/// to a one-shot timer, for consumers that are still reading from it when
/// control returns.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Register `blob` with the host and return the guarded URL.
    pub fn new(blob: &Blob) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    /// The URL string, e.g. for binding to an element's `src`.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Disarm the guard and revoke the URL `delay_ms` from now instead.
    pub fn revoke_later(self, delay_ms: u32) -> Result<(), JsValue> {
        let window = window().ok_or_else(|| JsError::new("Failed to get window"))?;

        let mut this = ManuallyDrop::new(self);
        let url = std::mem::take(&mut this.url);
        let callback = Closure::once_into_js(move || revoke(&url));
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )?;
        Ok(())
    }
}

impl Deref for ObjectUrl {
    type Target = str;

    fn deref(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        revoke(&self.url);
    }
}

fn revoke(url: &str) {
    // Failure here leaves the URL registered until the document unloads.
    if Url::revoke_object_url(url).is_err() {
        log::warn!("Failed to revoke object URL {}", url);
    }
}
