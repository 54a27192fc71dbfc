//! Browser Local Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`.

use todo_store::{KeyValueStorage, StoreError, StoreResult};
use wasm_bindgen::JsValue;

pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// The page's local storage; fails when storage is disabled (e.g. some private modes)
    pub fn local() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

/// Quota errors and security errors arrive as DOMExceptions
fn js_error(err: JsValue) -> StoreError {
    StoreError::Storage(format!("{:?}", err))
}
