use web_sys::{ Storage, Window };

use crate::controller::PreferenceStore;
use crate::error::ThemeError;

/// `window.localStorage`, when the browser grants it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {:?}", e);
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage
            .as_ref()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }
}
