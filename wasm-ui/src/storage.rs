//! `window.localStorage` as a recipe-box [`Storage`].

use recipe_box::{RecipeError, RecipeStore, Result, Storage};
use wasm_bindgen::{JsCast, JsValue};

/// The browser's origin-scoped localStorage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| RecipeError::Storage("no window object".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| RecipeError::Storage("localStorage is unavailable".to_string()))
    }
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Recipe store backed by localStorage under the default key.
pub fn browser_store() -> RecipeStore<BrowserStorage> {
    RecipeStore::new(BrowserStorage)
}

/// Convert a thrown JS value (e.g. `QuotaExceededError`) into a storage error.
fn js_error(value: JsValue) -> RecipeError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    RecipeError::Storage(message)
}
