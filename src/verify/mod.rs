//! Verification subsystem.
//!
//! # Data Flow
//! ```text
//! Baseline ──pass──▶ InjectFault ──▶ FailoverProbe ──▶ RemoveFault ──▶ RecoveryProbe ──▶ Verdict
//!    │
//!    └───fail──▶ Abort (exit 1)
//! ```
//!
//! # Design Decisions
//! - Fully sequential; no concurrency between probes or phases
//! - Counters are phase-scoped and returned by each phase driver, never
//!   shared mutable state
//! - Only a baseline violation aborts; everything after it runs to
//!   completion so fault injection is always cleaned up

pub mod counters;
pub mod phases;
pub mod runner;

pub use counters::PhaseCounters;
pub use phases::{BaselineReport, FailoverReport, RecoveryReport};
pub use runner::{RunError, VerificationReport, VerificationRun};
