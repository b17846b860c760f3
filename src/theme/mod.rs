//! Theme Management
//!
//! Tracks the light/dark mode, persists it through a [`ThemeStore`] and
//! pushes changes to whatever renders the dashboard.

#[cfg(feature = "native")]
mod file_store;

#[cfg(feature = "native")]
pub use file_store::FileThemeStore;

use std::fmt;
use thiserror::Error;

/// Storage key the theme mode is persisted under
pub const THEME_STORAGE_KEY: &str = "theme";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Read a persisted mode; anything other than "light" is dark
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from persisting the theme
#[derive(Error, Debug)]
pub enum ThemeStoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing storage refused the write or does not exist
    #[error("Theme storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistent storage for the theme mode string
pub trait ThemeStore {
    /// Previously saved mode, if any
    fn load(&self) -> Option<String>;

    /// Persist the mode
    fn save(&mut self, mode: &str) -> Result<(), ThemeStoreError>;
}

/// Something that re-renders when the theme changes
pub trait Themed {
    fn apply_theme(&mut self, theme: Theme);
}

/// In-memory store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a persisted value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, mode: &str) -> Result<(), ThemeStoreError> {
        self.value = Some(mode.to_string());
        Ok(())
    }
}

/// Owns the theme state and its persistence
pub struct ThemeManager<S> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            theme: Theme::default(),
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted theme (dark when absent) and apply it
    pub fn initialize(&mut self, target: &mut impl Themed) -> Theme {
        self.theme = self
            .store
            .load()
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default();

        tracing::debug!(theme = %self.theme, "Initializing theme");
        target.apply_theme(self.theme);
        self.theme
    }

    /// Flip the theme, persist it and apply it
    ///
    /// A failed write is logged; the new theme is applied regardless.
    pub fn toggle(&mut self, target: &mut impl Themed) -> Theme {
        self.theme = self.theme.toggled();

        if let Err(e) = self.store.save(self.theme.as_str()) {
            tracing::warn!(theme = %self.theme, error = %e, "Failed to persist theme");
        }

        target.apply_theme(self.theme);
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        applied: Vec<Theme>,
    }

    impl Themed for RecordingTarget {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&mut self, _mode: &str) -> Result<(), ThemeStoreError> {
            Err(ThemeStoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_initialize_defaults_to_dark() {
        let mut manager = ThemeManager::new(MemoryThemeStore::new());
        let mut target = RecordingTarget::default();

        assert_eq!(manager.initialize(&mut target), Theme::Dark);
        assert_eq!(target.applied, vec![Theme::Dark]);
        // Nothing is written on startup
        assert_eq!(manager.store().value(), None);
    }

    #[test]
    fn test_initialize_reads_persisted() {
        let mut manager = ThemeManager::new(MemoryThemeStore::with_value("light"));
        let mut target = RecordingTarget::default();

        assert_eq!(manager.initialize(&mut target), Theme::Light);
        assert_eq!(target.applied, vec![Theme::Light]);
    }

    #[test]
    fn test_toggle_persists_and_applies() {
        let mut manager = ThemeManager::new(MemoryThemeStore::new());
        let mut target = RecordingTarget::default();
        manager.initialize(&mut target);

        assert_eq!(manager.toggle(&mut target), Theme::Light);
        assert_eq!(manager.store().value(), Some("light"));

        assert_eq!(manager.toggle(&mut target), Theme::Dark);
        assert_eq!(manager.store().value(), Some("dark"));

        assert_eq!(target.applied, vec![Theme::Dark, Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_toggle_applies_despite_store_failure() {
        let mut manager = ThemeManager::new(BrokenStore);
        let mut target = RecordingTarget::default();

        assert_eq!(manager.toggle(&mut target), Theme::Light);
        assert_eq!(target.applied, vec![Theme::Light]);
        assert_eq!(manager.theme(), Theme::Light);
    }
}
