//! Chart configuration model
//!
//! The mutable configuration a chart surface renders from. Only
//! [`ChartPresenter`](super::ChartPresenter) mutates it.

use std::fmt;

use super::palette::{Palette, DARK_PALETTE};
use super::presenter::AXIS_PADDING_RATIO;
use crate::catalog::Unit;
use crate::format::to_fixed;

/// Rendering mode offered by the chart-type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
    Area,
    Scatter,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [ChartMode::Line, ChartMode::Bar, ChartMode::Area, ChartMode::Scatter];

    /// Parse a selector value; unrecognised values are plain line
    pub fn parse(raw: &str) -> Self {
        match raw {
            "bar" => ChartMode::Bar,
            "area" => ChartMode::Area,
            "scatter" => ChartMode::Scatter,
            _ => ChartMode::Line,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Line => "line",
            ChartMode::Bar => "bar",
            ChartMode::Area => "area",
            ChartMode::Scatter => "scatter",
        }
    }

    /// Geometry and fill flag this mode renders with
    pub fn geometry(&self) -> (Geometry, bool) {
        match self {
            ChartMode::Line => (Geometry::Line, false),
            ChartMode::Bar => (Geometry::Bar, false),
            ChartMode::Area => (Geometry::Line, true),
            ChartMode::Scatter => (Geometry::Scatter, false),
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive the dataset is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Line,
    Bar,
    Scatter,
}

/// Explicit y-axis bounds; `None` lets the surface pick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Per-dataset visual style
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub border_width: f64,
    pub point_radius: f64,
    pub point_border_width: f64,
    /// Bezier curve tension for line geometry
    pub tension: f64,
}

/// Tooltip box style
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub background: &'static str,
    pub padding: f64,
    pub corner_radius: f64,
    pub title_font_px: f64,
    pub body_font_px: f64,
    pub display_colors: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: "rgba(0, 0, 0, 0.8)",
            padding: 12.0,
            corner_radius: 8.0,
            title_font_px: 14.0,
            body_font_px: 13.0,
            display_colors: false,
        }
    }
}

/// Everything a surface needs to draw the single dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub geometry: Geometry,
    pub fill: bool,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    /// "{display name} ({unit})"
    pub dataset_label: String,
    /// Unit of the series currently loaded; drives tooltip and tick text
    pub unit: Unit,
    pub y_axis: AxisBounds,
    pub style: DatasetStyle,
    pub grid_color: &'static str,
    pub tick_color: &'static str,
    pub background_color: &'static str,
    pub tick_font_px: f64,
    pub show_legend: bool,
    pub tooltip: TooltipStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let palette = &DARK_PALETTE;
        Self {
            geometry: Geometry::Line,
            fill: true,
            labels: Vec::new(),
            values: Vec::new(),
            dataset_label: String::new(),
            unit: Unit::Percentage,
            y_axis: AxisBounds::default(),
            style: DatasetStyle {
                border_color: palette.line,
                background_color: palette.fill,
                point_background_color: palette.line,
                point_border_color: palette.point_border,
                border_width: 3.0,
                point_radius: 6.0,
                point_border_width: 2.0,
                tension: 0.4,
            },
            grid_color: palette.grid,
            tick_color: palette.tick,
            background_color: palette.background,
            tick_font_px: 12.0,
            show_legend: false,
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Recolor every themed element from `palette`
    pub(crate) fn recolor(&mut self, palette: &Palette) {
        self.style.border_color = palette.line;
        self.style.background_color = palette.fill;
        self.style.point_background_color = palette.line;
        self.style.point_border_color = palette.point_border;
        self.grid_color = palette.grid;
        self.tick_color = palette.tick;
        self.background_color = palette.background;
    }

    /// Tooltip text for the point at `index`, e.g. "GDP Growth Rate (%): 6.20%"
    ///
    /// The unit symbol follows the value directly.
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let value = self.values.get(index).copied().flatten()?;
        Some(format!(
            "{}: {}{}",
            self.dataset_label,
            to_fixed(value, 2),
            self.unit.symbol()
        ))
    }

    /// Y-axis tick text; only percentages carry a suffix
    pub fn format_tick(&self, value: f64) -> String {
        format!("{}{}", to_fixed(value, 2), self.unit.value_suffix())
    }

    /// Bounds to draw with, always `lo < hi`
    ///
    /// Explicit axis bounds win when they form a non-empty range. Otherwise
    /// the data range padded by a tenth on each side, else one unit around
    /// the data, else [0, 1].
    pub fn resolved_y_bounds(&self) -> (f64, f64) {
        let data = self
            .values
            .iter()
            .filter_map(|v| v.filter(|x| x.is_finite()))
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });

        let (data_min, data_max) = data.unwrap_or((0.0, 1.0));
        let min = self.y_axis.min.unwrap_or(data_min);
        let max = self.y_axis.max.unwrap_or(data_max);

        if max > min {
            return (min, max);
        }
        if data_max > data_min {
            let padding = (data_max - data_min) * AXIS_PADDING_RATIO;
            return (data_min - padding, data_max + padding);
        }
        (data_min - 1.0, data_max + 1.0)
    }
}
