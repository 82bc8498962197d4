//! # Browser localStorage: web persistence
//!
//! [`LocalStorage`] is the [`CardStorage`] implementation used on the **web
//! platform**. Each key maps to one `window.localStorage` item whose value is the
//! JSON text of the card sequence, the same shape older builds of the app wrote
//! under `"savedCards"`.
//!
//! The struct is zero-size; the `Storage` handle is looked up on every call since
//! `web_sys::Storage` is not `Send` and the lookup is cheap.

use crate::archive::CardStorage;
use crate::error::StoreError;

/// `window.localStorage`-backed CardStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn handle() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no browser window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("localStorage denied: {e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl CardStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("localStorage read failed: {e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("localStorage write failed: {e:?}")))
    }
}
