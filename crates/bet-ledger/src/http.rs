//! The one network call: fetch a sheet's CSV export as text.
//!
//! `CsvSource` is the seam ingestion depends on; `HttpSource` is the real
//! reqwest-backed implementation.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::LoadError;

/// Default request timeout for the export download.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Anything that can hand back raw CSV text for an export URL.
pub trait CsvSource {
    fn fetch_csv(&self, url: &str) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// HTTP fetcher with a pooled client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(REQUEST_TIMEOUT)
    }
}

impl CsvSource for HttpSource {
    async fn fetch_csv(&self, url: &str) -> Result<String, LoadError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/csv")
            .send()
            .await
            .map_err(|e| {
                warn!("HTTP request failed for {}: {}", url, e);
                LoadError::Transport {
                    status: None,
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(LoadError::transport_status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            LoadError::Transport {
                status: Some(status.as_u16()),
                reason: e.to_string(),
            }
        })
    }
}
