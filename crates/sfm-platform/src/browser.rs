//! DOM helpers: open the native file picker and save text as a download.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Event, HtmlAnchorElement, HtmlInputElement, Url};

use sfm_types::{document::UploadedFile, AppError, Result};

fn js_err(e: JsValue) -> AppError {
    AppError::JsInterop(format!("{:?}", e))
}

/// Show the browser's file picker and read the chosen file.
///
/// `accept` is the input's accept filter (".pdf"). Resolves to `None` when
/// the user dismisses the dialog.
pub async fn pick_file(accept: &str) -> Result<Option<UploadedFile>> {
    let input: HtmlInputElement = gloo_utils::document()
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| AppError::JsInterop("input is not an HtmlInputElement".to_string()))?;
    input.set_type("file");
    input.set_accept(accept);

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_change = {
        let tx = tx.clone();
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_cancel = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });
    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(js_err)?;
    input
        .add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref())
        .map_err(js_err)?;

    input.click();

    // Closures stay alive until the dialog resolves.
    let chosen = rx.await.unwrap_or(false);
    drop(on_change);
    drop(on_cancel);
    if !chosen {
        return Ok(None);
    }

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    log::info!("Picked {} ({} bytes, {})", file.name(), bytes.len(), file.type_());

    Ok(Some(UploadedFile::new(file.name(), file.type_(), bytes)))
}

/// Offer `text` to the user as a plain-text file download.
pub fn download_text(filename: &str, text: &str) -> Result<()> {
    let parts = Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| AppError::JsInterop("a is not an HtmlAnchorElement".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Downloaded {}", filename);
    Ok(())
}
