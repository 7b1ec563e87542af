//! Bus-tracking backend metrics API client
//!
//! Thin client over the backend's `/api/metrics` endpoints. It only reads the
//! server's view of its WebSocket sessions; nothing here mutates tracking
//! state, except the cleanup probe which the backend exposes for testing.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::monitoring::{CleanupReport, SessionMetric};

pub struct MetricsClient {
    base_url: String,
    client: Client,
}

impl MetricsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current metrics blob (counters, latency stats, recent events).
    /// Opaque to this tool; fetched to confirm the backend is responding.
    pub async fn current_metrics(&self) -> Result<Value> {
        let url = self.endpoint("/api/metrics/current");
        tracing::debug!(url = %url, "fetching current metrics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("requesting current metrics")?;

        if !response.status().is_success() {
            anyhow::bail!("metrics endpoint returned {}", response.status());
        }

        response.json().await.context("parsing metrics response")
    }

    /// WebSocket session records, in the order the server tracks them.
    /// Includes disconnected sessions; callers filter as needed.
    pub async fn session_metrics(&self) -> Result<Vec<SessionMetric>> {
        let url = self.endpoint("/api/metrics/sessions");
        tracing::debug!(url = %url, "fetching session metrics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("requesting session metrics")?;

        if !response.status().is_success() {
            anyhow::bail!("sessions endpoint returned {}", response.status());
        }

        response.json().await.context("parsing session metrics")
    }

    /// Basic health indicators derived from the metrics.
    pub async fn health(&self) -> Result<Value> {
        let url = self.endpoint("/api/metrics/health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("requesting health status")?;

        if !response.status().is_success() {
            anyhow::bail!("health endpoint returned {}", response.status());
        }

        response.json().await.context("parsing health response")
    }

    /// Ask the backend to report on orphaned sessions. The endpoint exists
    /// for manual testing only and does not force-close connections.
    pub async fn trigger_cleanup(&self) -> Result<CleanupReport> {
        let url = self.endpoint("/api/metrics/cleanup-sessions");
        tracing::info!(url = %url, "triggering manual session cleanup probe");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("requesting session cleanup")?;

        if !response.status().is_success() {
            anyhow::bail!("cleanup endpoint returned {}", response.status());
        }

        response.json().await.context("parsing cleanup response")
    }
}
