//! Series Data
//!
//! Everything between the remote API and the chart: the series model, the
//! source abstraction, the native HTTP client and the built-in fallback data.
//!
//! ## Data Flow
//!
//! 1. A [`SeriesSource`] fetches `GET {base}/data/{indicator}?range={range}`
//! 2. The JSON body is parsed into a [`SeriesPayload`] and checked
//! 3. Any failure becomes a [`FetchError`]; the caller substitutes
//!    [`FallbackProvider`] output

#[cfg(feature = "native")]
mod client;
mod error;
mod fallback;
mod source;
mod types;

#[cfg(feature = "native")]
pub use client::{DataClientConfig, HttpDataClient};
pub use error::{FetchError, FetchResult};
pub use fallback::FallbackProvider;
pub use source::{health_url, series_url, SeriesSource, DEFAULT_API_BASE};
pub use types::{SeriesPayload, SeriesResponse, SeriesStats};
