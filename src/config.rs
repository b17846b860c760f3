//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{IndicatorCatalog, TimeRange};
use crate::chart::ChartMode;
use crate::dashboard::SelectionState;
use crate::series::{DataClientConfig, DEFAULT_API_BASE};
use crate::theme::FileThemeStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Indicator API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout; unset means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> DataClientConfig {
        DataClientConfig {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Initial selection
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_indicator")]
    pub indicator: String,

    #[serde(default = "default_range")]
    pub range: String,

    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_indicator() -> String {
    IndicatorCatalog::DEFAULT_INDICATOR.to_string()
}

fn default_range() -> String {
    TimeRange::default().as_str().to_string()
}

fn default_mode() -> String {
    ChartMode::default().as_str().to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            indicator: default_indicator(),
            range: default_range(),
            mode: default_mode(),
        }
    }
}

impl DashboardConfig {
    pub fn selection(&self) -> SelectionState {
        SelectionState::new(
            self.indicator.clone(),
            TimeRange::parse(&self.range),
            ChartMode::parse(&self.mode),
        )
    }
}

/// Theme persistence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// File holding the theme mode; defaults to `$CONFIG_DIR/econdash/theme`
    pub state_file: Option<String>,
}

impl ThemeConfig {
    pub fn state_path(&self) -> PathBuf {
        self.state_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(FileThemeStore::default_path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("econdash").join("config.toml")),
            Some(PathBuf::from("./econdash.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ECONDASH_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(path) = std::env::var("ECONDASH_THEME_FILE") {
            self.theme.state_file = Some(path);
        }

        if let Ok(level) = std::env::var("ECONDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ECONDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# econdash configuration
#
# Environment variables override these settings:
# - ECONDASH_API_URL
# - ECONDASH_THEME_FILE
# - ECONDASH_LOG_LEVEL
# - ECONDASH_LOG_FORMAT

[api]
# Indicator API base URL
base_url = "http://localhost:5000/api"

# Transport timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 30

[dashboard]
# Indicator shown at startup (gdp, cpi, gst, unemployment, forex, iip)
indicator = "gdp"

# Time range: 3M, 1Y, 2Y, 5Y
range = "1Y"

# Chart type: line, bar, area, scatter
mode = "line"

[theme]
# File the light/dark choice is persisted in
# state_file = "~/.config/econdash/theme"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
