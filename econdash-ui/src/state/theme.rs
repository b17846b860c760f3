//! localStorage theme persistence

use econdash::theme::{ThemeStore, ThemeStoreError, THEME_STORAGE_KEY};

/// Theme store backed by `localStorage["theme"]`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, mode: &str) -> Result<(), ThemeStoreError> {
        let storage = local_storage()
            .ok_or_else(|| ThemeStoreError::Unavailable("localStorage is not available".to_string()))?;

        storage
            .set_item(THEME_STORAGE_KEY, mode)
            .map_err(|e| ThemeStoreError::Unavailable(format!("{:?}", e)))
    }
}
