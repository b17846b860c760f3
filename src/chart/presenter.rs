//! Chart Presenter
//!
//! Owns the one chart surface of the dashboard and the configuration it
//! draws from. All mutation of the chart goes through here.

use super::config::{AxisBounds, ChartConfig, ChartMode};
use super::palette::Palette;
use crate::catalog::IndicatorDescriptor;
use crate::series::SeriesResponse;
use crate::theme::{Theme, Themed};

/// Share of the value span added above and below the data
pub(super) const AXIS_PADDING_RATIO: f64 = 0.1;

/// How a surface should transition to the new configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Animate from the previous state (new data)
    Animated,
    /// Swap without animation (style or mode change)
    Immediate,
}

/// The rendering widget behind the presenter
pub trait ChartSurface {
    /// Draw `config`. Called after every presenter mutation.
    fn redraw(&mut self, config: &ChartConfig, redraw: Redraw);
}

/// Single-chart presenter
pub struct ChartPresenter<W> {
    surface: W,
    config: ChartConfig,
}

impl<W: ChartSurface> ChartPresenter<W> {
    /// Create the chart with an empty series and the default style
    pub fn new(mut surface: W) -> Self {
        let config = ChartConfig::default();
        surface.redraw(&config, Redraw::Immediate);
        Self { surface, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn surface(&self) -> &W {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut W {
        &mut self.surface
    }

    /// Draw the current configuration again without changing it
    pub fn redraw(&mut self) {
        self.surface.redraw(&self.config, Redraw::Immediate);
    }

    /// Replace the dataset and rescale the y-axis
    ///
    /// Bounds are computed over present values only; when every value is
    /// absent the previous bounds are kept.
    pub fn set_series(&mut self, series: &SeriesResponse, descriptor: &IndicatorDescriptor) {
        self.config.labels = series.labels().to_vec();
        self.config.values = series.values().to_vec();
        self.config.dataset_label = descriptor.series_label();
        self.config.unit = descriptor.unit;

        if let Some((min, max)) = series.value_bounds() {
            self.config.y_axis = padded_bounds(min, max);
        }

        self.surface.redraw(&self.config, Redraw::Animated);
    }

    /// Switch the rendering geometry
    pub fn set_mode(&mut self, mode: ChartMode) {
        let (geometry, fill) = mode.geometry();
        self.config.geometry = geometry;
        self.config.fill = fill;

        self.surface.redraw(&self.config, Redraw::Immediate);
    }
}

impl<W: ChartSurface> Themed for ChartPresenter<W> {
    /// Recolor for `theme`; data and bounds are untouched
    fn apply_theme(&mut self, theme: Theme) {
        self.config.recolor(Palette::for_theme(theme));
        self.surface.redraw(&self.config, Redraw::Immediate);
    }
}

/// `[max(0, min - 10% span), max + 10% span]`
fn padded_bounds(min: f64, max: f64) -> AxisBounds {
    let padding = (max - min) * AXIS_PADDING_RATIO;
    AxisBounds {
        min: Some((min - padding).max(0.0)),
        max: Some(max + padding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IndicatorCatalog, TimeRange};
    use crate::chart::config::Geometry;
    use crate::series::SeriesStats;
    use crate::testing::RecordingSurface;

    fn series(values: &[Option<f64>]) -> SeriesResponse {
        SeriesResponse::new(
            "gdp",
            TimeRange::OneYear,
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("P{}", i + 1), *v)),
            SeriesStats::default(),
        )
    }

    fn gdp() -> &'static IndicatorDescriptor {
        IndicatorCatalog::new().get("gdp").unwrap()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("bound not set");
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_new_draws_empty_chart() {
        let presenter = ChartPresenter::new(RecordingSurface::default());
        assert_eq!(presenter.surface().redraws, vec![Redraw::Immediate]);
        assert!(presenter.config().values.is_empty());
    }

    #[test]
    fn test_set_series_scales_axis() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        presenter.set_series(&series(&[Some(4.5), Some(13.1), Some(6.2), Some(6.0)]), gdp());

        let config = presenter.config();
        assert_close(config.y_axis.min, 3.64);
        assert_close(config.y_axis.max, 13.96);
        assert_eq!(config.dataset_label, "GDP Growth Rate (%)");
        assert_eq!(config.labels, vec!["P1", "P2", "P3", "P4"]);
        assert_eq!(presenter.surface().redraws.last(), Some(&Redraw::Animated));
    }

    #[test]
    fn test_axis_min_clamped_at_zero() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        presenter.set_series(&series(&[Some(-3.0), Some(7.0)]), gdp());

        assert_close(presenter.config().y_axis.min, 0.0);
        assert_close(presenter.config().y_axis.max, 8.0);
    }

    #[test]
    fn test_absent_values_skipped_but_kept() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        presenter.set_series(&series(&[None, Some(10.0), None, Some(20.0)]), gdp());

        let config = presenter.config();
        assert_eq!(config.values, vec![None, Some(10.0), None, Some(20.0)]);
        assert_close(config.y_axis.min, 9.0);
        assert_close(config.y_axis.max, 21.0);
    }

    #[test]
    fn test_all_absent_keeps_previous_bounds() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        presenter.set_series(&series(&[Some(4.5), Some(13.1), Some(6.2), Some(6.0)]), gdp());
        let before = presenter.config().y_axis;

        presenter.set_series(&series(&[None, None, None]), gdp());

        let after = presenter.config().y_axis;
        assert_eq!(after, before);
        assert!(!after.min.unwrap().is_nan());
        assert_eq!(presenter.config().values.len(), 3);
    }

    #[test]
    fn test_set_mode() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());

        presenter.set_mode(ChartMode::parse("area"));
        assert_eq!(presenter.config().geometry, Geometry::Line);
        assert!(presenter.config().fill);

        presenter.set_mode(ChartMode::parse("bar"));
        assert_eq!(presenter.config().geometry, Geometry::Bar);
        assert!(!presenter.config().fill);

        presenter.set_mode(ChartMode::parse("unknown"));
        assert_eq!(presenter.config().geometry, Geometry::Line);
        assert!(!presenter.config().fill);

        assert_eq!(presenter.surface().redraws.last(), Some(&Redraw::Immediate));
    }

    #[test]
    fn test_apply_theme_keeps_data() {
        let mut presenter = ChartPresenter::new(RecordingSurface::default());
        presenter.set_series(&series(&[Some(1.0), Some(2.0)]), gdp());
        let bounds = presenter.config().y_axis;

        presenter.apply_theme(Theme::Light);

        let config = presenter.config();
        assert_eq!(config.style.border_color, "#ea580c");
        assert_eq!(config.style.point_background_color, "#ea580c");
        assert_eq!(config.grid_color, "rgba(0, 0, 0, 0.05)");
        assert_eq!(config.tick_color, "#475569");
        assert_eq!(config.y_axis, bounds);
        assert_eq!(config.values, vec![Some(1.0), Some(2.0)]);

        presenter.apply_theme(Theme::Dark);
        assert_eq!(presenter.config().style.border_color, "#ff8c42");
        assert_eq!(presenter.config().tick_color, "#a0a9c5");
    }
}
