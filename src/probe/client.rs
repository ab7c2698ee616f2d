//! Single-probe HTTP client.
//!
//! # Responsibilities
//! - Issue one GET against the service version endpoint
//! - Record HTTP status and serving pool per probe
//! - Fold transport failures into neutral data points

use url::Url;

use crate::config::{EndpointConfig, HttpClientConfig};
use crate::probe::pool::{extract_pool, Pool, POOL_HEADER};

/// Outcome of one probe.
///
/// `status: None` means the request never produced a response (connect
/// error or timeout). Such a probe counts as a failure and its pool is
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: Option<u16>,
    pub pool: Pool,
}

impl ProbeOutcome {
    /// A probe counts as a success only for a plain 200.
    pub fn is_success(&self) -> bool {
        self.status == Some(200)
    }
}

/// Error type for prober construction. Probing itself never errors.
#[derive(Debug, thiserror::Error)]
pub enum ProberError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid service endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Issues sequential probes against the service version endpoint.
pub struct Prober {
    client: reqwest::Client,
    endpoint: Url,
}

impl Prober {
    pub fn new(endpoints: &EndpointConfig, http: &HttpClientConfig) -> Result<Self, ProberError> {
        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .build()?;
        let endpoint = Url::parse(&endpoints.service_url)?.join(&endpoints.version_path)?;

        Ok(Self { client, endpoint })
    }

    /// Issue one probe. Never fails; transport errors are folded into the
    /// outcome as a status-less, unknown-pool data point.
    pub async fn probe(&self) -> ProbeOutcome {
        let response = match self.client.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "probe produced no response");
                return ProbeOutcome {
                    status: None,
                    pool: Pool::Unknown,
                };
            }
        };

        let status = response.status().as_u16();
        let header = response
            .headers()
            .get(POOL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.unwrap_or_default();
        let pool = extract_pool(header.as_deref(), &body);

        ProbeOutcome {
            status: Some(status),
            pool,
        }
    }
}
