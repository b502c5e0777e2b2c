//! HTTP client for the analysis backend.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::config::ApiConfig;

use super::error::AnalysisError;
use super::types::{AnalysisRequest, AnalysisResponse};

/// Number of evidence hits requested from the retrieval index.
pub const DEFAULT_TOP_K: u32 = 6;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for `POST {base_url}/analyze`.
///
/// Stateless and safe to share; the session layer enforces that at most one
/// request is in flight at a time.
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build analysis client");

        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform exactly one analysis exchange.
    ///
    /// The caller is responsible for trim/non-empty checks on `log_text`.
    /// Failures are classified per [`AnalysisError`]; a non-success status
    /// carries the response body when it can be read.
    pub async fn analyze(
        &self,
        log_text: &str,
        top_k: u32,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let url = format!("{}/analyze", self.base_url);
        let request = AnalysisRequest {
            log_text: log_text.to_string(),
            top_k,
        };

        tracing::debug!(url = %url, top_k, log_bytes = log_text.len(), "sending analysis request");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|source| AnalysisError::Transport { source })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            // Best effort: an unreadable error body must not mask the status.
            let body = response.text().await.ok().filter(|body| !body.is_empty());

            tracing::warn!(status = %status, latency_ms, "analysis request rejected");

            return Err(AnalysisError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| AnalysisError::Transport { source })?;

        let parsed: AnalysisResponse =
            serde_json::from_str(&body).map_err(|source| AnalysisError::Decode { source })?;

        tracing::debug!(
            latency_ms,
            matches = parsed.mitre_matches.len(),
            evidence = parsed.evidence.len(),
            "analysis response decoded"
        );

        Ok(parsed)
    }
}
