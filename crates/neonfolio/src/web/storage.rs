//! `sessionStorage` as [`SessionFlags`].

use web_sys::Storage;

use crate::intro::SessionFlags;

/// Session flags backed by the window's `sessionStorage`.
///
/// Storage may be unavailable (privacy modes, sandboxed frames); reads then
/// return nothing and writes are dropped, so the intro plays every time.
#[derive(Debug, Clone, Default)]
pub struct SessionStorageFlags {
    storage: Option<Storage>,
}

impl SessionStorageFlags {
    /// Flags for the current window.
    #[must_use]
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
        if storage.is_none() {
            tracing::debug!("sessionStorage unavailable");
        }
        Self { storage }
    }
}

impl SessionFlags for SessionStorageFlags {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else { return };
        if let Err(err) = storage.set_item(key, value) {
            tracing::warn!("Failed to store {}: {:?}", key, err);
        }
    }
}
