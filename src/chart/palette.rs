//! Light and dark chart palettes.

use crate::theme::Theme;

/// Colors a chart surface needs for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Series line and point fill
    pub line: &'static str,
    /// Area fill under the line
    pub fill: &'static str,
    pub point_border: &'static str,
    pub grid: &'static str,
    /// Axis tick labels
    pub tick: &'static str,
    /// Plot background for surfaces that paint their own
    pub background: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    line: "#ff8c42",
    fill: "rgba(255, 140, 66, 0.1)",
    point_border: "#fff",
    grid: "rgba(255, 255, 255, 0.05)",
    tick: "#a0a9c5",
    background: "#05090f",
};

pub const LIGHT_PALETTE: Palette = Palette {
    line: "#ea580c",
    fill: "rgba(234, 88, 12, 0.1)",
    point_border: "#fff",
    grid: "rgba(0, 0, 0, 0.05)",
    tick: "#475569",
    background: "#f8fbff",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}
