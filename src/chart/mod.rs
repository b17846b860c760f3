//! Chart
//!
//! The single chart of the dashboard, abstracted away from any particular
//! rendering library.
//!
//! ## Architecture
//!
//! - **ChartConfig**: the mutable configuration a widget renders
//! - **ChartSurface**: the widget itself (canvas, terminal, test recorder)
//! - **ChartPresenter**: the only thing allowed to mutate the configuration

mod config;
mod palette;
mod presenter;

pub use config::{AxisBounds, ChartConfig, ChartMode, DatasetStyle, Geometry, TooltipStyle};
pub use palette::{Palette, DARK_PALETTE, LIGHT_PALETTE};
pub use presenter::{ChartPresenter, ChartSurface, Redraw};
