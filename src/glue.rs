use js_sys::{Array, Function, Promise, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlImageElement};

/// Build a [`Blob`] of the given MIME type from a byte slice.
pub fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, JsValue> {
    // SAFETY: the Uint8Array is used to initialize the blob but does not leave this function
    let parts = Array::from_iter([unsafe { Uint8Array::view(bytes) }]);
    let bag = BlobPropertyBag::new();
    bag.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &bag)
}

/// Start the image's asynchronous `decode()` where the host provides one.
///
/// Feature-detected through [`Reflect`], so a host without
/// `HTMLImageElement.decode`, or with one that throws on invocation,
/// yields `None` instead of an exception.
pub(crate) fn image_decode_promise(img: &HtmlImageElement) -> Option<Promise> {
    let decode = Reflect::get(img.as_ref(), &JsValue::from_str("decode")).ok()?;
    let decode: Function = decode.dyn_into().ok()?;
    let promise = decode.call0(img.as_ref()).ok()?;
    promise.dyn_into().ok()
}
