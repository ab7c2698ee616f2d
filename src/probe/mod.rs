//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! One probe (client.rs):
//!     GET <service_url>/version
//!     → record HTTP status (None on transport failure)
//!     → extract serving pool (pool.rs)
//!     → ProbeOutcome
//!
//! Pool extraction (pool.rs):
//!     X-App-Pool response header (trimmed, case-insensitive)
//!     → fallback: JSON body field "pool"
//!     → fallback: Unknown
//! ```
//!
//! # Design Decisions
//! - A probe never fails the procedure; transport errors become neutral
//!   data points with no status and an unknown pool
//! - No retries anywhere; each probe is a single best-effort attempt

pub mod client;
pub mod pool;

pub use client::{ProbeOutcome, Prober, ProberError};
pub use pool::{Pool, POOL_HEADER};
