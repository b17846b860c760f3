//! Dashboard
//!
//! Selection state, the load pipeline and the stats/header rendering.

mod controller;
mod selection;
mod view;

pub use controller::{DashboardController, ReloadOutcome, ReloadRequest};
pub use selection::SelectionState;
pub use view::{ChangeDirection, ChangeView, DataOrigin, DisplaySurface, HeaderView, StatsView};
