//! Indicator Catalog
//!
//! Static metadata for the economic indicators the dashboard knows about,
//! and the time-range table used for header labelling.

use std::fmt;

/// Unit an indicator is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Values are percentages ("%")
    Percentage,
    /// Money in a scaled denomination (e.g. "₹ Lakh Cr")
    CurrencyScaled(&'static str),
    /// Plain counts or index points
    AbsoluteCount(&'static str),
}

impl Unit {
    /// Symbol appended to values and dataset labels
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Percentage => "%",
            Unit::CurrencyScaled(label) | Unit::AbsoluteCount(label) => *label,
        }
    }

    /// Suffix for compact numeric displays; only percentages carry one
    pub fn value_suffix(&self) -> &'static str {
        match self {
            Unit::Percentage => "%",
            _ => "",
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Unit::Percentage)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Metadata describing one indicator
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDescriptor {
    /// Unique key, also the path segment used by the API
    pub id: &'static str,
    /// Human-readable name shown in the header and chart label
    pub display_name: &'static str,
    pub unit: Unit,
    /// Publishing authority
    pub source_label: &'static str,
}

impl IndicatorDescriptor {
    /// Dataset label as shown by the chart, e.g. "GDP Growth Rate (%)"
    pub fn series_label(&self) -> String {
        format!("{} ({})", self.display_name, self.unit)
    }
}

/// Descriptor used when the selected id is not in the catalog
pub const UNLISTED_INDICATOR: IndicatorDescriptor = IndicatorDescriptor {
    id: "",
    display_name: "Data",
    unit: Unit::Percentage,
    source_label: "",
};

const INDICATORS: &[IndicatorDescriptor] = &[
    IndicatorDescriptor {
        id: "gdp",
        display_name: "GDP Growth Rate",
        unit: Unit::Percentage,
        source_label: "RBI",
    },
    IndicatorDescriptor {
        id: "cpi",
        display_name: "Consumer Price Index",
        unit: Unit::Percentage,
        source_label: "MOSPI",
    },
    IndicatorDescriptor {
        id: "gst",
        display_name: "GST Collections",
        unit: Unit::CurrencyScaled("₹ Lakh Cr"),
        source_label: "CBIC",
    },
    IndicatorDescriptor {
        id: "unemployment",
        display_name: "Unemployment Rate",
        unit: Unit::Percentage,
        source_label: "CMIE",
    },
    IndicatorDescriptor {
        id: "forex",
        display_name: "Foreign Exchange Reserves",
        unit: Unit::CurrencyScaled("Billion USD"),
        source_label: "RBI",
    },
    IndicatorDescriptor {
        id: "iip",
        display_name: "Index of Industrial Production",
        unit: Unit::Percentage,
        source_label: "MOSPI",
    },
];

/// Read-only lookup over the built-in indicators
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorCatalog;

impl IndicatorCatalog {
    /// Id selected when nothing else is configured
    pub const DEFAULT_INDICATOR: &'static str = "gdp";

    pub fn new() -> Self {
        Self
    }

    /// Look up an indicator by id
    pub fn get(&self, id: &str) -> Option<&'static IndicatorDescriptor> {
        INDICATORS.iter().find(|d| d.id == id)
    }

    /// Look up an indicator, falling back to a generic descriptor
    pub fn get_or_unlisted(&self, id: &str) -> &'static IndicatorDescriptor {
        self.get(id).unwrap_or(&UNLISTED_INDICATOR)
    }

    pub fn all(&self) -> &'static [IndicatorDescriptor] {
        INDICATORS
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Requested window for a series query
///
/// Values outside the known set are carried verbatim so they can still be
/// forwarded to the API; they label as "Recent Data".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    ThreeMonths,
    #[default]
    OneYear,
    TwoYears,
    FiveYears,
    Unrecognized(String),
}

impl TimeRange {
    /// The enumerated options offered by selection controls
    pub const KNOWN: [TimeRange; 4] = [
        TimeRange::ThreeMonths,
        TimeRange::OneYear,
        TimeRange::TwoYears,
        TimeRange::FiveYears,
    ];

    /// Parse a raw query value; never fails
    pub fn parse(raw: &str) -> Self {
        match raw {
            "3M" => TimeRange::ThreeMonths,
            "1Y" => TimeRange::OneYear,
            "2Y" => TimeRange::TwoYears,
            "5Y" => TimeRange::FiveYears,
            other => TimeRange::Unrecognized(other.to_string()),
        }
    }

    /// Wire value used in the `range` query parameter
    pub fn as_str(&self) -> &str {
        match self {
            TimeRange::ThreeMonths => "3M",
            TimeRange::OneYear => "1Y",
            TimeRange::TwoYears => "2Y",
            TimeRange::FiveYears => "5Y",
            TimeRange::Unrecognized(raw) => raw,
        }
    }

    /// Human-readable window, e.g. "Last 2 Years"
    pub fn date_range_label(&self) -> &'static str {
        match self {
            TimeRange::ThreeMonths => "Last 3 Quarters",
            TimeRange::OneYear => "Last 1 Year",
            TimeRange::TwoYears => "Last 2 Years",
            TimeRange::FiveYears => "Last 5 Years",
            TimeRange::Unrecognized(_) => "Recent Data",
        }
    }

    /// Reporting frequency of the series behind this window
    pub fn frequency_label(&self) -> &'static str {
        // Every published range is quarterly today.
        "Quarterly"
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TimeRange::Unrecognized(_))
    }
}

impl From<&str> for TimeRange {
    fn from(raw: &str) -> Self {
        TimeRange::parse(raw)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = IndicatorCatalog::new();
        let gst = catalog.get("gst").unwrap();
        assert_eq!(gst.display_name, "GST Collections");
        assert_eq!(gst.unit.symbol(), "₹ Lakh Cr");
        assert_eq!(gst.source_label, "CBIC");
        assert!(catalog.get("repo").is_none());
        assert!(catalog.contains(IndicatorCatalog::DEFAULT_INDICATOR));
    }

    #[test]
    fn test_unlisted_descriptor() {
        let catalog = IndicatorCatalog::new();
        let descriptor = catalog.get_or_unlisted("nope");
        assert_eq!(descriptor.display_name, "Data");
        assert!(descriptor.unit.is_percentage());
    }

    #[test]
    fn test_series_label() {
        let catalog = IndicatorCatalog::new();
        assert_eq!(catalog.get("gdp").unwrap().series_label(), "GDP Growth Rate (%)");
        assert_eq!(
            catalog.get("forex").unwrap().series_label(),
            "Foreign Exchange Reserves (Billion USD)"
        );
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(Unit::Percentage.value_suffix(), "%");
        assert_eq!(Unit::CurrencyScaled("Billion USD").value_suffix(), "");
        assert_eq!(Unit::AbsoluteCount("Million").value_suffix(), "");
    }

    #[test]
    fn test_time_range_labels() {
        assert_eq!(TimeRange::ThreeMonths.date_range_label(), "Last 3 Quarters");
        assert_eq!(TimeRange::FiveYears.date_range_label(), "Last 5 Years");
        for range in TimeRange::KNOWN {
            assert_eq!(range.frequency_label(), "Quarterly");
        }
    }

    #[test]
    fn test_unrecognized_time_range_defaults() {
        let range = TimeRange::parse("10Y");
        assert!(!range.is_recognized());
        assert_eq!(range.date_range_label(), "Recent Data");
        assert_eq!(range.frequency_label(), "Quarterly");
        assert_eq!(range.as_str(), "10Y");
    }

    #[test]
    fn test_time_range_round_trip() {
        for range in TimeRange::KNOWN {
            assert_eq!(TimeRange::parse(range.as_str()), range);
        }
    }
}
