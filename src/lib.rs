//! # econdash
//!
//! Economic indicator dashboard: fetches a time series for a selected
//! indicator and time range from a REST API, renders it as a themeable chart
//! with summary statistics, and falls back to built-in sample data whenever
//! the API is unavailable.
//!
//! ## Modules
//!
//! - [`catalog`]: Known indicators, units and time ranges
//! - [`series`]: Series model, the [`SeriesSource`] seam and fallback data
//! - [`chart`]: Chart configuration and the presenter that owns it
//! - [`dashboard`]: Selection state, load pipeline and stats/header views
//! - [`theme`]: Light/dark mode with persistence
//! - [`format`]: Number text shared by every front-end
//!
//! With the `native` feature (default) the crate also carries the reqwest
//! client, configuration, logging and the ratatui surfaces used by the
//! `econdash` binary. The browser front-end builds on the same core with
//! default features disabled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use econdash::*;
//! use econdash::terminal::{write_buffer, DashboardView, TerminalChart, TerminalDisplay};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpDataClient::new(DataClientConfig::default())?;
//!     let mut dashboard = DashboardController::new(
//!         client,
//!         TerminalChart::new(40, false),
//!         TerminalDisplay::new(false),
//!         SelectionState::default(),
//!     );
//!
//!     dashboard.select_indicator("cpi").await;
//!     let view = DashboardView::new(
//!         dashboard.display(),
//!         dashboard.presenter().surface(),
//!         ratatui::text::Line::raw("cpi · 1Y"),
//!     );
//!     write_buffer(&view.into_buffer(), &mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod format;
pub mod series;
pub mod theme;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod terminal;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use catalog::{IndicatorCatalog, IndicatorDescriptor, TimeRange, Unit};

pub use series::{
    FallbackProvider, FetchError, FetchResult, SeriesPayload, SeriesResponse, SeriesSource,
    SeriesStats, DEFAULT_API_BASE,
};

#[cfg(feature = "native")]
pub use series::{DataClientConfig, HttpDataClient};

pub use chart::{ChartConfig, ChartMode, ChartPresenter, ChartSurface, Palette, Redraw};

pub use dashboard::{
    DashboardController, DataOrigin, DisplaySurface, HeaderView, ReloadOutcome, ReloadRequest,
    SelectionState, StatsView,
};

pub use theme::{MemoryThemeStore, Theme, ThemeManager, ThemeStore, ThemeStoreError, Themed};

#[cfg(feature = "native")]
pub use theme::FileThemeStore;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
