#![warn(missing_docs)]
//! # Blobs and the DOM
//!
//! Browser-side helpers for WebAssembly applications built on [`web-sys`]:
//! saving an in-memory [`Blob`](web_sys::Blob) to the user's disk through
//! the host's download flow, and decoding a blob into an
//! [`HtmlImageElement`](web_sys::HtmlImageElement) whose pixel data is
//! ready for `drawImage` and friends.
//!
//! Both operations are stateless leaves over the host's object-URL
//! machinery. Each call registers one transient URL for its blob and
//! releases it on every exit path; the [`ObjectUrl`] guard that enforces
//! this is public and can be used on its own.
//!
//! ```no_run
//! use web_sys::Blob;
//! # fn demo(blob: &Blob) -> Result<(), wasm_bindgen::JsValue> {
//! blob_dom::download("report.csv", blob)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`web-sys`]: https://docs.rs/web-sys

use log::Level;
use wasm_bindgen::prelude::*;

mod download;
mod glue;
mod image;
mod object_url;

pub use crate::download::{
    download, download_bytes, download_with, DownloadOptions, DEFAULT_REVOKE_DELAY_MS,
};
pub use crate::glue::bytes_to_blob;
pub use crate::image::{blob_to_image, bytes_to_image, ImageLoadError};
pub use crate::object_url::ObjectUrl;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Called when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    if let Err(e) = console_log::init_with_level(Level::Debug) {
        error(&format!("Failed to set up logger: {}", e));
    }

    Ok(())
}
