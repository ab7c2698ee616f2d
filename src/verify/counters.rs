//! Phase counters.
//!
//! # Responsibilities
//! - Tally probe outcomes within one phase
//! - Derive exact success/routing ratios for the verdicts
//!
//! # Design Decisions
//! - Created fresh at the start of each phase, read once at the end
//! - Ratios are exact quotients of the recorded counts; rounding happens
//!   only at display time

use crate::probe::{Pool, ProbeOutcome};

/// Tallies for one phase of the procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseCounters {
    pub attempts: usize,
    pub successes: usize,
    pub failures: usize,
    pub blue: usize,
    pub green: usize,
    pub unknown: usize,
}

impl PhaseCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one probe outcome into the tallies.
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.attempts += 1;
        if outcome.is_success() {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        match outcome.pool {
            Pool::Blue => self.blue += 1,
            Pool::Green => self.green += 1,
            Pool::Unknown => self.unknown += 1,
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.rate(self.successes)
    }

    pub fn blue_rate(&self) -> f64 {
        self.rate(self.blue)
    }

    pub fn green_rate(&self) -> f64 {
        self.rate(self.green)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            count as f64 / self.attempts as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: Option<u16>, pool: Pool) -> ProbeOutcome {
        ProbeOutcome { status, pool }
    }

    #[test]
    fn test_record_classifies_status_and_pool() {
        let mut counters = PhaseCounters::new();
        counters.record(&outcome(Some(200), Pool::Blue));
        counters.record(&outcome(Some(200), Pool::Green));
        counters.record(&outcome(Some(500), Pool::Green));
        counters.record(&outcome(None, Pool::Unknown));

        assert_eq!(counters.attempts, 4);
        assert_eq!(counters.successes, 2);
        assert_eq!(counters.failures, 2);
        assert_eq!(counters.blue, 1);
        assert_eq!(counters.green, 2);
        assert_eq!(counters.unknown, 1);
    }

    #[test]
    fn test_rates_are_exact_quotients() {
        let mut counters = PhaseCounters::new();
        for _ in 0..19 {
            counters.record(&outcome(Some(200), Pool::Green));
        }
        counters.record(&outcome(Some(200), Pool::Blue));

        // 19/20 is exactly representable as the same double as 0.95.
        assert_eq!(counters.green_rate(), 0.95);
        assert_eq!(counters.success_rate(), 1.0);
        assert_eq!(counters.blue_rate(), 0.05);
    }

    #[test]
    fn test_empty_counters_have_zero_rates() {
        let counters = PhaseCounters::new();
        assert_eq!(counters.success_rate(), 0.0);
        assert_eq!(counters.green_rate(), 0.0);
    }
}
