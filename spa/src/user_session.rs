use session::error::{Error, Result};
use session::{SessionStorage, SessionStore};
use wasm_bindgen::JsValue;

/// The browser's `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

fn js_error(error: JsValue) -> Error {
    Error::storage(format!("{error:?}"))
}

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| Error::storage("no window"))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::storage("local storage unavailable"))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}

pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
