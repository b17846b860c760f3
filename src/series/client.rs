//! Indicator API Client
//!
//! reqwest-backed [`SeriesSource`] for native front-ends.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::{FetchError, FetchResult};
use super::source::{health_url, series_url, SeriesSource, DEFAULT_API_BASE};
use super::types::{SeriesPayload, SeriesResponse};
use crate::catalog::TimeRange;

/// Configuration for the HTTP data client
#[derive(Debug, Clone)]
pub struct DataClientConfig {
    /// API base, e.g. "http://localhost:5000/api"
    pub base_url: String,
    /// Transport-level timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for DataClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

/// HTTP client for the indicator API
#[derive(Debug, Clone)]
pub struct HttpDataClient {
    client: Client,
    config: DataClientConfig,
}

impl HttpDataClient {
    /// Create a client with the given configuration
    pub fn new(config: DataClientConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DataClientConfig {
        &self.config
    }

    /// Check whether the API answers its health endpoint
    pub async fn health_check(&self) -> FetchResult<()> {
        let url = health_url(&self.config.base_url);

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(FetchError::Status(response.status().as_u16()))
        }
    }

    async fn request_series(&self, url: &str, time_range: &TimeRange) -> FetchResult<SeriesResponse> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        let payload: SeriesPayload = serde_json::from_str(&body)?;

        payload.into_response(time_range.clone())
    }
}

#[async_trait(?Send)]
impl SeriesSource for HttpDataClient {
    async fn fetch_series(
        &self,
        indicator_id: &str,
        time_range: &TimeRange,
    ) -> FetchResult<SeriesResponse> {
        let url = series_url(&self.config.base_url, indicator_id, time_range);
        tracing::debug!(%url, "Fetching indicator data");

        let result = self.request_series(&url, time_range).await;
        if let Err(e) = &result {
            tracing::warn!(%url, error = %e, "Error fetching indicator data");
        }

        result
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else if err.is_connect() {
        FetchError::Transport(format!("connection failed: {}", err))
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesStats;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    async fn series_handler(
        Path(indicator): Path<String>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<SeriesPayload> {
        let range = params.get("range").cloned().unwrap_or_default();
        Json(SeriesPayload {
            indicator,
            stats: SeriesStats {
                latest: 5.0,
                highest: 9.0,
                lowest: 2.0,
                average: 5.33,
                change_percent: 3.2,
            },
            labels: vec![format!("{} A", range), format!("{} B", range), format!("{} C", range)],
            data: vec![Some(2.0), None, Some(9.0)],
        })
    }

    fn client_for(base_url: String) -> HttpDataClient {
        HttpDataClient::new(DataClientConfig {
            base_url,
            request_timeout: Some(Duration::from_secs(5)),
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = DataClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert!(config.request_timeout.is_none());
    }

    #[tokio::test]
    async fn test_fetch_series_success() {
        let base = spawn_stub(Router::new().route("/api/data/:indicator", get(series_handler))).await;
        let client = client_for(base);

        let series = client.fetch_series("cpi", &TimeRange::TwoYears).await.unwrap();

        assert_eq!(series.indicator_id(), "cpi");
        assert_eq!(series.time_range(), &TimeRange::TwoYears);
        assert_eq!(series.labels(), &["2Y A", "2Y B", "2Y C"]);
        assert_eq!(series.values(), &[Some(2.0), None, Some(9.0)]);
        assert_eq!(series.stats().change_percent, 3.2);
    }

    #[tokio::test]
    async fn test_fetch_series_forwards_unknown_range() {
        let base = spawn_stub(Router::new().route("/api/data/:indicator", get(series_handler))).await;
        let client = client_for(base);

        let series = client
            .fetch_series("gdp", &TimeRange::parse("10Y"))
            .await
            .unwrap();

        assert_eq!(series.labels()[0], "10Y A");
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let router = Router::new().route(
            "/api/data/:indicator",
            get(|| async { (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Invalid indicator"}))) }),
        );
        let client = client_for(spawn_stub(router).await);

        let err = client.fetch_series("nope", &TimeRange::OneYear).await.unwrap_err();
        assert_eq!(err, FetchError::Status(404));
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_error() {
        let router = Router::new().route("/api/data/:indicator", get(|| async { "not json" }));
        let client = client_for(spawn_stub(router).await);

        let err = client.fetch_series("gdp", &TimeRange::OneYear).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_length_mismatch_is_fetch_error() {
        let router = Router::new().route(
            "/api/data/:indicator",
            get(|| async {
                Json(serde_json::json!({
                    "indicator": "gdp",
                    "stats": {"latest": 1, "highest": 1, "lowest": 1, "average": 1, "change": 0},
                    "labels": ["a", "b"],
                    "data": [1.0]
                }))
            }),
        );
        let client = client_for(spawn_stub(router).await);

        let err = client.fetch_series("gdp", &TimeRange::OneYear).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/api", addr));

        let err = client.fetch_series("gdp", &TimeRange::OneYear).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = Router::new().route("/api/health", get(|| async { Json(serde_json::json!({"status": "healthy"})) }));
        let client = client_for(spawn_stub(router).await);

        assert!(client.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check_unhealthy() {
        let router = Router::new().route(
            "/api/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let client = client_for(spawn_stub(router).await);

        assert_eq!(client.health_check().await, Err(FetchError::Status(503)));
    }
}
