//! State Management
//!
//! Dashboard state shared through context, and theme persistence.

pub mod global;
pub mod theme;

pub use global::{provide_dashboard_state, DashboardState, SignalDisplay};
pub use theme::LocalStorageThemeStore;
