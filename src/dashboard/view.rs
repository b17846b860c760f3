//! Stats and header rendering
//!
//! Text view models for the stat cards and the indicator header, and the
//! [`DisplaySurface`] they are pushed to.

use crate::catalog::{IndicatorDescriptor, TimeRange, Unit};
use crate::format::{to_display, to_fixed};
use crate::series::SeriesStats;
use crate::theme::Theme;

/// Sign of the change indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    /// Style marker for the change element
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeDirection::Positive => "positive",
            ChangeDirection::Negative => "negative",
        }
    }
}

/// Rendered change indicator, e.g. "-7.10%" / negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeView {
    pub text: String,
    pub direction: ChangeDirection,
}

/// Rendered stat cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub latest: String,
    pub highest: String,
    pub lowest: String,
    pub average: String,
    pub change: ChangeView,
}

impl StatsView {
    /// Format `stats` for display
    ///
    /// Values carry the unit symbol only for percentages. The change is shown
    /// with an explicit sign and two decimals.
    pub fn render(stats: &SeriesStats, unit: Unit) -> Self {
        let suffix = unit.value_suffix();
        let value = |v: f64| format!("{}{}", to_display(normalize(v)), suffix);

        let change = normalize(stats.change_percent);
        let direction = if change >= 0.0 {
            ChangeDirection::Positive
        } else {
            ChangeDirection::Negative
        };
        let sign = if change >= 0.0 { "+" } else { "" };

        Self {
            latest: value(stats.latest),
            highest: value(stats.highest),
            lowest: value(stats.lowest),
            average: value(stats.average),
            change: ChangeView {
                text: format!("{}{}{}", sign, to_fixed(change, 2), suffix),
                direction,
            },
        }
    }
}

/// NaN reads as zero and negative zero prints without its sign
fn normalize(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v + 0.0
    }
}

/// Rendered indicator header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub date_range: String,
    /// "{frequency} • {source}"
    pub source_line: String,
}

impl HeaderView {
    pub fn render(descriptor: &IndicatorDescriptor, time_range: &TimeRange) -> Self {
        Self {
            title: descriptor.display_name.to_string(),
            date_range: time_range.date_range_label().to_string(),
            source_line: format!("{} • {}", time_range.frequency_label(), descriptor.source_label),
        }
    }
}

/// Where the displayed series came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fetched from the API
    Live,
    /// Built-in data substituted after a failed fetch
    Fallback,
}

/// The non-chart part of the dashboard
pub trait DisplaySurface {
    fn show_stats(&mut self, stats: &StatsView);

    fn show_header(&mut self, header: &HeaderView);

    /// Notified after every applied load
    fn show_origin(&mut self, _origin: DataOrigin) {}

    fn set_theme(&mut self, theme: Theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IndicatorCatalog;

    fn stats(change: f64) -> SeriesStats {
        SeriesStats {
            latest: 6.0,
            highest: 13.1,
            lowest: 4.5,
            average: 7.45,
            change_percent: change,
        }
    }

    #[test]
    fn test_negative_change() {
        let view = StatsView::render(&stats(-7.1), Unit::Percentage);
        assert_eq!(view.change.text, "-7.10%");
        assert_eq!(view.change.direction, ChangeDirection::Negative);
        assert_eq!(view.change.direction.css_class(), "negative");
    }

    #[test]
    fn test_positive_change() {
        let view = StatsView::render(&stats(3.2), Unit::Percentage);
        assert_eq!(view.change.text, "+3.20%");
        assert_eq!(view.change.direction, ChangeDirection::Positive);
        assert_eq!(view.change.direction.css_class(), "positive");
    }

    #[test]
    fn test_zero_change_is_positive() {
        let view = StatsView::render(&stats(-0.0), Unit::Percentage);
        assert_eq!(view.change.text, "+0.00%");
        assert_eq!(view.change.direction, ChangeDirection::Positive);

        let view = StatsView::render(&stats(f64::NAN), Unit::Percentage);
        assert_eq!(view.change.text, "+0.00%");
    }

    #[test]
    fn test_change_half_cent_rounds_away_from_zero() {
        assert_eq!(StatsView::render(&stats(0.125), Unit::Percentage).change.text, "+0.13%");
        assert_eq!(StatsView::render(&stats(3.125), Unit::Percentage).change.text, "+3.13%");
        assert_eq!(StatsView::render(&stats(-7.125), Unit::Percentage).change.text, "-7.13%");
    }

    #[test]
    fn test_extreme_values_use_exponent_notation() {
        let mut extreme = stats(0.0);
        extreme.highest = 1e21;
        extreme.lowest = 1e-7;
        let view = StatsView::render(&extreme, Unit::CurrencyScaled("Billion USD"));
        assert_eq!(view.highest, "1e+21");
        assert_eq!(view.lowest, "1e-7");
    }

    #[test]
    fn test_values_keep_natural_precision() {
        let view = StatsView::render(&stats(0.0), Unit::Percentage);
        assert_eq!(view.latest, "6%");
        assert_eq!(view.highest, "13.1%");
        assert_eq!(view.lowest, "4.5%");
        assert_eq!(view.average, "7.45%");
    }

    #[test]
    fn test_non_percentage_has_no_suffix() {
        let view = StatsView::render(&stats(12.5), Unit::CurrencyScaled("₹ Lakh Cr"));
        assert_eq!(view.average, "7.45");
        assert_eq!(view.change.text, "+12.50");
    }

    #[test]
    fn test_header() {
        let catalog = IndicatorCatalog::new();
        let header = HeaderView::render(catalog.get("cpi").unwrap(), &TimeRange::TwoYears);
        assert_eq!(header.title, "Consumer Price Index");
        assert_eq!(header.date_range, "Last 2 Years");
        assert_eq!(header.source_line, "Quarterly • MOSPI");
    }

    #[test]
    fn test_header_unknown_range() {
        let catalog = IndicatorCatalog::new();
        let header = HeaderView::render(catalog.get("gdp").unwrap(), &TimeRange::parse("7Y"));
        assert_eq!(header.date_range, "Recent Data");
        assert_eq!(header.source_line, "Quarterly • RBI");
    }
}
