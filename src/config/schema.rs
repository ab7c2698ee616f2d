//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the verifier.
//! All types derive Serde traits for deserialization from config files, and
//! all defaults match the canonical verification procedure: 5 baseline
//! probes, 20 failover probes at a 95% green threshold, 5 recovery probes
//! with a 3-of-5 majority.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the verification tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VerifyConfig {
    /// Endpoints of the system under test.
    pub endpoints: EndpointConfig,

    /// Baseline phase settings.
    pub baseline: BaselineConfig,

    /// Failover window settings.
    pub failover: FailoverConfig,

    /// Recovery phase settings.
    pub recovery: RecoveryConfig,

    /// Chaos-control settings.
    pub chaos: ChaosConfig,

    /// HTTP client settings.
    pub http: HttpClientConfig,
}

/// Endpoints of the service under test and its chaos companion.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the service under test.
    pub service_url: String,

    /// Base URL of the chaos-control endpoint.
    pub chaos_url: String,

    /// Path of the version/health endpoint used for probing.
    pub version_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8080".to_string(),
            chaos_url: "http://localhost:8081".to_string(),
            version_path: "/version".to_string(),
        }
    }
}

/// Baseline phase: establish that the primary pool serves all traffic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Number of baseline probes.
    pub probes: usize,

    /// Delay between baseline probes in milliseconds.
    pub interval_ms: u64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            probes: 5,
            interval_ms: 0,
        }
    }
}

impl BaselineConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Failover window: probe while fault injection is active.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FailoverConfig {
    /// Number of probes in the failover window.
    pub probes: usize,

    /// Delay between failover probes in milliseconds.
    pub interval_ms: u64,

    /// Fraction of probes that must land on the backup pool for the
    /// failover verdict to hold (e.g. 0.95 for 19 of 20).
    pub green_threshold: f64,

    /// Settle time after starting fault injection, in milliseconds,
    /// giving the routing layer time to detect the fault.
    pub settle_ms: u64,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            probes: 20,
            interval_ms: 400,
            green_threshold: 0.95,
            settle_ms: 3000,
        }
    }
}

impl FailoverConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Recovery phase: probe after fault injection has stopped.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Number of recovery probes.
    pub probes: usize,

    /// Delay between recovery probes in milliseconds.
    pub interval_ms: u64,

    /// Minimum probes back on the primary pool for recovery to count
    /// as successful. Advisory; never affects the exit code.
    pub majority: usize,

    /// Settle time after stopping fault injection, in milliseconds.
    /// Longer than the inject settle because recovery detection needs
    /// consecutive passing health checks to propagate.
    pub settle_ms: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            probes: 5,
            interval_ms: 500,
            majority: 3,
            settle_ms: 5000,
        }
    }
}

impl RecoveryConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Chaos-control settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChaosConfig {
    /// Fault mode requested from the chaos endpoint.
    pub mode: String,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            mode: "error".to_string(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Per-request timeout in seconds. A probe that exceeds it counts as
    /// a failed data point, not a fatal error.
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
