//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart;
pub mod controls;
pub mod header;
pub mod settings;
pub mod stats_panel;

pub use chart::Chart;
pub use controls::{Controls, ThemeToggle};
pub use header::ChartHeader;
pub use settings::ApiSettings;
pub use stats_panel::StatsPanel;
