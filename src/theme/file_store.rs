//! File-backed theme persistence for native front-ends.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ThemeStore, ThemeStoreError, THEME_STORAGE_KEY};

/// Stores the theme mode as a one-line file
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$CONFIG_DIR/econdash/theme`, or `./.econdash-theme` without a config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("econdash").join(THEME_STORAGE_KEY))
            .unwrap_or_else(|| PathBuf::from("./.econdash-theme"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let value = content.trim();
                (!value.is_empty()).then(|| value.to_string())
            }
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = ?self.path, error = %e, "Failed to read theme file");
                }
                None
            }
        }
    }

    fn save(&mut self, mode: &str) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, format!("{}\n", mode))?;
        Ok(())
    }
}
