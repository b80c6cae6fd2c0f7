//! Reading user-selected files.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};
use yew::Callback;

/// Read `file` as a `data:` URL and emit it once loading finishes.
///
/// The read cannot be cancelled; a failed read is logged and emits nothing.
pub fn read_as_data_url(file: &File, on_loaded: Callback<String>) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_clone = reader.clone();
    let name = file.name();

    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        match reader_clone.result() {
            Ok(result) => match result.as_string() {
                Some(data_url) => {
                    log::debug!("Read '{}' ({} chars encoded)", name, data_url.len());
                    on_loaded.emit(data_url);
                }
                None => log::warn!("Reading '{}' produced no text", name),
            },
            Err(e) => log::warn!("Reading '{}' failed: {:?}", name, e),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    reader.read_as_data_url(file)
}
