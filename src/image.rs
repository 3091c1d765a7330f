//! Decoding blobs into ready-to-draw image elements.

use js_sys::Promise;
use log::debug;
use thiserror::Error;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlImageElement};

use crate::glue::{bytes_to_blob, image_decode_promise};
use crate::object_url::ObjectUrl;

/// The image element could not load the supplied bytes.
///
/// The host's error event carries no diagnostic detail, so every failed
/// load collapses into this one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Image loading error")]
pub struct ImageLoadError;

impl From<ImageLoadError> for JsValue {
    fn from(e: ImageLoadError) -> Self {
        JsError::from(e).into()
    }
}

/// Decode `blob` into a loaded [`HtmlImageElement`].
///
/// The blob is bound to the element through a transient object URL which
/// is released again on every exit path, resolved or not. Resolution
/// means the pixel data is in place for `drawImage` and friends. A blob
/// the host cannot decode rejects with an `Error` whose message is
/// `Image loading error`.
#[wasm_bindgen(js_name = blobToImage)]
pub async fn blob_to_image(blob: Blob) -> Result<HtmlImageElement, JsValue> {
    let url = ObjectUrl::new(&blob)?;
    let img = HtmlImageElement::new()?;
    img.set_decoding("async");
    img.set_src(&url);

    // Arm the load/error handlers before the first await, the host may
    // settle either event while decode() is in flight.
    let loaded = wait_for_load(&img);

    // WebKit rejects decode() for SVG sources even when the image is
    // usable: https://bugs.webkit.org/show_bug.cgi?id=188347
    if let Some(decode) = image_decode_promise(&img) {
        if JsFuture::from(decode).await.is_err() {
            debug!("decode() rejected, falling back to the load event");
        }
    }

    // The load signal stays authoritative, hosts may abandon an
    // in-flight decode() without settling it.
    JsFuture::from(loaded).await?;
    Ok(img)
}

/// Decode raw bytes of the given MIME type into a loaded image element.
pub async fn bytes_to_image(bytes: &[u8], mime_type: &str) -> Result<HtmlImageElement, JsValue> {
    let blob = bytes_to_blob(bytes, mime_type)?;
    blob_to_image(blob).await
}

/// A promise that settles with the image's load outcome.
fn wait_for_load(img: &HtmlImageElement) -> Promise {
    // The native error event carries no detail, bind the reason up front.
    let reason = JsValue::from(ImageLoadError);
    Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject.bind1(&JsValue::UNDEFINED, &reason)));
    })
}

#[cfg(test)]
mod tests {
    use super::ImageLoadError;

    #[test]
    fn error_message_is_stable() {
        assert_eq!(ImageLoadError.to_string(), "Image loading error");
    }
}
