//! Browser adapters for the motion preference: `localStorage` and the
//! `prefers-reduced-motion` media query.

use site_core::constants::REDUCED_MOTION_QUERY;
use site_core::{MemoryStorage, PreferenceStorage, StorageError};
use web_sys as web;

/// `localStorage` when the browser grants it, otherwise an in-memory map so the
/// preference still holds for the session.
pub enum BrowserStorage {
    Local(web::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            Some(Err(e)) => {
                log::warn!("[storage] localStorage denied: {:?}", e);
                BrowserStorage::Memory(MemoryStorage::default())
            }
            _ => {
                log::warn!("[storage] localStorage unavailable");
                BrowserStorage::Memory(MemoryStorage::default())
            }
        }
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(s) => s
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{:?}", e))),
            BrowserStorage::Memory(m) => m.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(s) => s
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{:?}", e))),
            BrowserStorage::Memory(m) => m.write(key, value),
        }
    }
}

/// Platform reduced-motion signal; `None` if `matchMedia` is unavailable.
pub fn prefers_reduced_motion() -> Option<bool> {
    let window = web::window()?;
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => Some(mql.matches()),
        Ok(None) => None,
        Err(e) => {
            log::debug!("[motion] matchMedia failed: {:?}", e);
            None
        }
    }
}
