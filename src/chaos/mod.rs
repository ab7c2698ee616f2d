//! Chaos-control client.
//!
//! # Responsibilities
//! - Toggle fault injection on the primary pool via the chaos endpoint
//! - Log (never parse) whatever the endpoint says back
//!
//! # Design Decisions
//! - One POST per toggle, no retries; the endpoint acknowledges synchronously
//! - An unreachable chaos endpoint is a real error: the procedure cannot
//!   continue without fault injection (the caller decides whether a failed
//!   stop during cleanup is fatal)

use url::Url;

use crate::config::{EndpointConfig, HttpClientConfig};

/// Error type for chaos-control calls.
#[derive(Debug, thiserror::Error)]
pub enum ChaosError {
    #[error("chaos endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chaos endpoint rejected the request with status {0}")]
    Rejected(u16),

    #[error("invalid chaos endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Client for the chaos-control endpoint.
pub struct ChaosClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ChaosClient {
    pub fn new(endpoints: &EndpointConfig, http: &HttpClientConfig) -> Result<Self, ChaosError> {
        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .build()?;
        let base_url = Url::parse(&endpoints.chaos_url)?;

        Ok(Self { client, base_url })
    }

    /// Begin fault injection on the primary pool.
    pub async fn start(&self, mode: &str) -> Result<(), ChaosError> {
        let mut url = self.base_url.join("/chaos/start")?;
        url.query_pairs_mut().append_pair("mode", mode);
        self.post(url).await
    }

    /// End fault injection.
    pub async fn stop(&self) -> Result<(), ChaosError> {
        let url = self.base_url.join("/chaos/stop")?;
        self.post(url).await
    }

    async fn post(&self, url: Url) -> Result<(), ChaosError> {
        tracing::info!(url = %url, "toggling fault injection");

        let response = self.client.post(url).send().await?;
        let status = response.status();

        // Response body is diagnostic only, never control flow.
        let body = response.text().await.unwrap_or_default();
        if !body.is_empty() {
            tracing::debug!(body = %body, "chaos endpoint response");
        }

        if !status.is_success() {
            return Err(ChaosError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
