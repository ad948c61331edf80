//! Offer in-memory text to the user as a file download.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::DownloadError;

pub fn download_text(file_name: &str, contents: &str) -> Result<(), DownloadError> {
	let document = web_sys::window()
		.and_then(|win| win.document())
		.ok_or(DownloadError { stage: "document" })?;

	let options = BlobPropertyBag::new();
	options.set_type("text/plain");
	let blob = Blob::new_with_str_sequence_and_options(
		&Array::of1(&JsValue::from_str(contents)),
		&options,
	)
	.map_err(|_| DownloadError { stage: "blob" })?;

	let url = Url::create_object_url_with_blob(&blob)
		.map_err(|_| DownloadError { stage: "object url" })?;

	let clicked = document
		.create_element("a")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
		.map(|anchor| {
			anchor.set_href(&url);
			anchor.set_download(file_name);
			anchor.click();
		});

	// Released whether or not the click went through.
	let _ = Url::revoke_object_url(&url);

	clicked.ok_or(DownloadError { stage: "anchor" })
}
