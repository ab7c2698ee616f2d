//! Pool identity extraction.
//!
//! # Responsibilities
//! - Identify which deployment slice served a probe response
//! - Try the `X-App-Pool` header first, then the JSON body `pool` field
//! - Normalize incidental whitespace/CR and case

use serde_json::Value;

/// Response header carrying the serving pool identity.
pub const POOL_HEADER: &str = "X-App-Pool";

/// Which deployment slice served a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Primary slice, expected to serve under normal conditions.
    Blue,
    /// Backup slice, expected to take over under fault injection.
    Green,
    /// Identity missing or unparseable.
    Unknown,
}

impl Pool {
    /// Parse a pool label. Trailing whitespace/CR is trimmed and case is
    /// ignored; anything other than blue/green maps to `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "blue" => Pool::Blue,
            "green" => Pool::Green,
            _ => Pool::Unknown,
        }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pool::Blue => write!(f, "blue"),
            Pool::Green => write!(f, "green"),
            Pool::Unknown => write!(f, "unknown"),
        }
    }
}

/// Extract the pool identity from a response header value and raw body.
///
/// A recognizable header wins. The body is only consulted when the header is
/// absent or unparseable, and only when it is JSON with a string `pool` field.
pub fn extract_pool(header: Option<&str>, body: &str) -> Pool {
    if let Some(value) = header {
        let pool = Pool::parse(value);
        if pool != Pool::Unknown {
            return pool;
        }
    }

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(label) = json.get("pool").and_then(Value::as_str) {
            return Pool::parse(label);
        }
    }

    Pool::Unknown
}
