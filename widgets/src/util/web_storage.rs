//! `localStorage`-backed key/value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wishlist persists through [`toolkit::storage::KeyValueStore`]; this is
//! the browser implementation. Storage can be missing or throw (private
//! browsing, quota), and every failure surfaces as
//! [`ToolkitError::Storage`] so the wishlist module fails in isolation.

#[cfg(test)]
#[path = "web_storage_test.rs"]
mod web_storage_test;

use toolkit::ToolkitError;
use toolkit::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn unavailable() -> ToolkitError {
    ToolkitError::Storage("localStorage is unavailable".to_owned())
}

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, ToolkitError> {
    let window = web_sys::window().ok_or_else(unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(unavailable()),
        Err(e) => Err(js_error(&e)),
    }
}

#[cfg(feature = "csr")]
fn js_error(value: &wasm_bindgen::JsValue) -> ToolkitError {
    ToolkitError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToolkitError> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ToolkitError> {
        #[cfg(feature = "csr")]
        {
            storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove(&self, key: &str) -> Result<(), ToolkitError> {
        #[cfg(feature = "csr")]
        {
            storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }
}
