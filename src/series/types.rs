//! Series data types
//!
//! The in-memory series handed to the chart, and the wire shape the API
//! returns for it.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{FetchError, FetchResult};
use crate::catalog::TimeRange;

/// Summary statistics published alongside a series
///
/// Always taken as-is from whichever source produced the series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesStats {
    pub latest: f64,
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
    /// Change over the window, in percent. Missing or null reads as zero.
    #[serde(rename = "change", default, deserialize_with = "null_as_zero")]
    pub change_percent: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// JSON body of `GET /data/{indicator}?range={range}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub indicator: String,
    pub stats: SeriesStats,
    pub labels: Vec<String>,
    pub data: Vec<Option<f64>>,
}

impl SeriesPayload {
    /// Convert into a series, checking that labels and data line up
    pub fn into_response(self, time_range: TimeRange) -> FetchResult<SeriesResponse> {
        SeriesResponse::from_columns(
            self.indicator,
            time_range,
            self.labels,
            self.data,
            self.stats,
        )
    }
}

/// One indicator's series for one time range
///
/// Labels and values are always the same length and index-paired. Absent
/// values keep their slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesResponse {
    indicator_id: String,
    time_range: TimeRange,
    labels: Vec<String>,
    values: Vec<Option<f64>>,
    stats: SeriesStats,
}

impl SeriesResponse {
    /// Build a series from (label, value) pairs
    pub fn new<I, L>(
        indicator_id: impl Into<String>,
        time_range: TimeRange,
        points: I,
        stats: SeriesStats,
    ) -> Self
    where
        I: IntoIterator<Item = (L, Option<f64>)>,
        L: Into<String>,
    {
        let (labels, values): (Vec<String>, Vec<Option<f64>>) = points
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();

        Self {
            indicator_id: indicator_id.into(),
            time_range,
            labels,
            values,
            stats,
        }
    }

    /// Build a series from parallel columns, rejecting mismatched lengths
    pub fn from_columns(
        indicator_id: impl Into<String>,
        time_range: TimeRange,
        labels: Vec<String>,
        values: Vec<Option<f64>>,
        stats: SeriesStats,
    ) -> FetchResult<Self> {
        if labels.len() != values.len() {
            return Err(FetchError::Malformed(format!(
                "{} labels but {} data points",
                labels.len(),
                values.len()
            )));
        }

        Ok(Self {
            indicator_id: indicator_id.into(),
            time_range,
            labels,
            values,
            stats,
        })
    }

    /// Same series, relabelled for another time range
    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    pub fn indicator_id(&self) -> &str {
        &self.indicator_id
    }

    pub fn time_range(&self) -> &TimeRange {
        &self.time_range
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn stats(&self) -> &SeriesStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Values that are present and finite, in order
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| v.filter(|x| x.is_finite()))
    }

    /// (min, max) over present values, or `None` when every value is absent
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.present_values().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }
}
