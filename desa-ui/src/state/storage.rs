//! Local Storage Backend
//!
//! `PreferenceStorage` over the browser's `localStorage`.

use indeks_desa::preferences::{PreferenceError, PreferenceResult, PreferenceStorage};
use wasm_bindgen::JsValue;

/// Browser local storage. Without a window (or with storage disabled) reads
/// return nothing and writes fail.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> PreferenceResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| PreferenceError::Storage("localStorage unavailable".to_string()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> PreferenceResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> PreferenceError {
    PreferenceError::Storage(format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indeks_desa::preferences::{FontSize, PreferenceStore, SETTINGS_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let mut storage = LocalStorage::new();
        let _ = storage.remove(SETTINGS_KEY);

        let mut store = PreferenceStore::new(storage);
        store.load();
        store.set_font_size(FontSize::Large);
        store.save_current().unwrap();

        let mut reloaded = PreferenceStore::new(LocalStorage::new());
        assert_eq!(reloaded.load().font_size, FontSize::Large);

        reloaded.reset().unwrap();
        assert_eq!(LocalStorage::new().get(SETTINGS_KEY).unwrap(), None);
    }
}
