//! # Status Fetcher
//!
//! Issues the single GET against the TfL status endpoint and hands back the
//! parsed JSON document. One request, one fixed timeout, no retries; every
//! transport or decode problem surfaces as an error for main to turn into
//! the failure indicator and a non-zero exit.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::REQUEST_TIMEOUT;

/// Thin wrapper around a reqwest client configured with the fixed deadline.
pub struct StatusClient {
    client: reqwest::Client,
}

impl StatusClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch the status document from `url`.
    ///
    /// A non-success HTTP status is treated as a failed fetch, not as data.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "requesting line status");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("status request to {url} failed"))?
            .error_for_status()
            .context("status endpoint returned an error response")?;

        let doc = response
            .json::<Value>()
            .await
            .context("status response was not valid JSON")?;

        tracing::info!(url, "line status fetched");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error() {
        let client = StatusClient::new().unwrap();
        // Port 1 is never listening locally; the connect fails immediately.
        let result = client.fetch("http://127.0.0.1:1/status").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_error() {
        let client = StatusClient::new().unwrap();
        let result = client.fetch("not-a-url").await;
        assert!(result.is_err());
    }
}
