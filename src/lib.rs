//! Blue/Green Failover Verification Tool
//!
//! Drives a fixed sequence of probe phases against a running blue/green
//! deployment and its chaos-control endpoint, then reduces the observations
//! to a human-readable summary and a pass/fail exit code.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │            FAILOVER VERIFIER                 │
//!                       │                                              │
//!   GET /version        │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ◀───────────────────┼──│  probe  │◀───│  verify  │───▶│  chaos  │──┼───▶ POST /chaos/start
//!   (service under test)│  │ client  │    │  runner  │    │ client  │  │     POST /chaos/stop
//!                       │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                       │                      │                       │
//!                       │                      ▼                       │
//!                       │  ┌─────────┐    ┌──────────┐                 │
//!                       │  │ config  │    │  report  │───▶ stdout +    │
//!                       │  │         │    │          │     exit code   │
//!                       │  └─────────┘    └──────────┘                 │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! The verifier implements no load balancing and no fault injection of its
//! own; it only observes the effects of the external routing layer while the
//! chaos endpoint degrades the primary pool.

pub mod chaos;
pub mod config;
pub mod probe;
pub mod report;
pub mod verify;

pub use config::VerifyConfig;
pub use verify::{VerificationReport, VerificationRun};
