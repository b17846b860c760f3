//! HTTP API Client
//!
//! gloo-net backed [`SeriesSource`] for the indicator REST API.

use async_trait::async_trait;
use gloo_net::http::Request;

use econdash::catalog::TimeRange;
use econdash::series::{
    health_url, series_url, FetchError, FetchResult, SeriesPayload, SeriesResponse, SeriesSource,
    DEFAULT_API_BASE,
};

/// localStorage key holding a user-chosen API base
pub const API_URL_STORAGE_KEY: &str = "econdash_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, url.trim());
        }
    }
}

/// Indicator API client
///
/// Without an explicit base the URL is read from localStorage on every
/// request, so a saved setting applies to the next reload.
#[derive(Debug, Clone, Default)]
pub struct GlooDataClient {
    base_url: Option<String>,
}

impl GlooDataClient {
    pub fn from_storage() -> Self {
        Self::default()
    }

    pub fn with_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(get_api_base)
    }

    /// Check whether the API answers its health endpoint
    pub async fn check_health(&self) -> FetchResult<()> {
        let response = Request::get(&health_url(&self.base_url()))
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Network error: {}", e)))?;

        if response.ok() {
            Ok(())
        } else {
            Err(FetchError::Status(response.status()))
        }
    }
}

#[async_trait(?Send)]
impl SeriesSource for GlooDataClient {
    async fn fetch_series(
        &self,
        indicator_id: &str,
        time_range: &TimeRange,
    ) -> FetchResult<SeriesResponse> {
        let url = series_url(&self.base_url(), indicator_id, time_range);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Network error: {}", e)))?;
        let payload: SeriesPayload = serde_json::from_str(&body)?;

        payload.into_response(time_range.clone())
    }
}
