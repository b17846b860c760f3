//! Selection state.

use crate::catalog::{IndicatorCatalog, TimeRange};
use crate::chart::ChartMode;

/// What the dashboard is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub indicator_id: String,
    pub time_range: TimeRange,
    pub chart_mode: ChartMode,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            indicator_id: IndicatorCatalog::DEFAULT_INDICATOR.to_string(),
            time_range: TimeRange::default(),
            chart_mode: ChartMode::default(),
        }
    }
}

impl SelectionState {
    pub fn new(indicator_id: impl Into<String>, time_range: TimeRange, chart_mode: ChartMode) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            time_range,
            chart_mode,
        }
    }
}
