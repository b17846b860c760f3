//! Series source abstraction
//!
//! The controller pulls data through [`SeriesSource`] so the same pipeline can
//! run against reqwest (native), gloo-net (browser) or a scripted source in
//! tests.

use async_trait::async_trait;

use super::error::FetchResult;
use super::types::SeriesResponse;
use crate::catalog::TimeRange;

/// Default API base, matching the backend's development server
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Anything that can produce a series for an indicator and time range
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// cooperative event loop.
#[async_trait(?Send)]
pub trait SeriesSource {
    /// Fetch one series. A single attempt; no retries.
    async fn fetch_series(
        &self,
        indicator_id: &str,
        time_range: &TimeRange,
    ) -> FetchResult<SeriesResponse>;
}

/// `{base}/data/{indicator}?range={range}`
///
/// Values are forwarded as given; they are only percent-encoded so the URL
/// stays well formed.
pub fn series_url(api_base: &str, indicator_id: &str, time_range: &TimeRange) -> String {
    format!(
        "{}/data/{}?range={}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(indicator_id),
        urlencoding::encode(time_range.as_str())
    )
}

/// `{base}/health`
pub fn health_url(api_base: &str) -> String {
    format!("{}/health", api_base.trim_end_matches('/'))
}
