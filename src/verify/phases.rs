//! Phase drivers and per-phase verdicts.
//!
//! # Responsibilities
//! - Drive the baseline, failover-window and recovery probe loops
//! - Return phase-scoped counters wrapped in verdict types
//!
//! # Design Decisions
//! - Probes are strictly sequential; pacing is an explicit sleep between
//!   probes, never after the last one
//! - A failed probe is a data point, not an error; a phase always runs to
//!   completion once started

use std::time::Duration;

use tokio::time::sleep;

use crate::config::{BaselineConfig, FailoverConfig, RecoveryConfig};
use crate::probe::Prober;
use crate::verify::counters::PhaseCounters;

/// Baseline phase result: did the primary pool serve all probes?
#[derive(Debug, Clone)]
pub struct BaselineReport {
    pub counters: PhaseCounters,
}

impl BaselineReport {
    /// Baseline holds only when every probe was served by blue. Anything
    /// else invalidates the premise of the later phases.
    pub fn all_primary(&self) -> bool {
        self.counters.attempts > 0 && self.counters.blue == self.counters.attempts
    }
}

/// Failover window result, carrying two independent sub-verdicts.
#[derive(Debug, Clone)]
pub struct FailoverReport {
    pub counters: PhaseCounters,
    green_threshold: f64,
}

impl FailoverReport {
    pub fn new(counters: PhaseCounters, green_threshold: f64) -> Self {
        Self {
            counters,
            green_threshold,
        }
    }

    /// Zero-downtime holds only when every single probe returned 200.
    pub fn zero_downtime(&self) -> bool {
        self.counters.attempts > 0 && self.counters.successes == self.counters.attempts
    }

    /// Failover holds when the backup pool served at least the configured
    /// fraction of probes (19 of 20 at the default 0.95).
    pub fn failover_holds(&self) -> bool {
        self.counters.green_rate() >= self.green_threshold
    }

    pub fn green_threshold(&self) -> f64 {
        self.green_threshold
    }
}

/// Recovery phase result. Advisory only; never affects the exit code.
#[derive(Debug, Clone)]
pub struct RecoveryReport {
    pub counters: PhaseCounters,
    majority: usize,
}

impl RecoveryReport {
    pub fn new(counters: PhaseCounters, majority: usize) -> Self {
        Self { counters, majority }
    }

    /// Recovery is successful when a majority of probes are back on blue;
    /// anything less is reported as partial.
    pub fn recovered(&self) -> bool {
        self.counters.blue >= self.majority
    }
}

/// Issue `probes` sequential probes spaced by `interval`, tallying outcomes.
async fn probe_loop(
    prober: &Prober,
    phase: &str,
    probes: usize,
    interval: Duration,
) -> PhaseCounters {
    let mut counters = PhaseCounters::new();

    for n in 1..=probes {
        let outcome = prober.probe().await;
        match outcome.status {
            Some(status) => {
                tracing::info!(phase, probe = n, status, pool = %outcome.pool, "probe")
            }
            None => tracing::info!(phase, probe = n, status = "none", pool = %outcome.pool, "probe"),
        }
        counters.record(&outcome);

        if n < probes && !interval.is_zero() {
            sleep(interval).await;
        }
    }

    counters
}

/// Phase 1: establish that blue serves all traffic before injecting faults.
pub async fn run_baseline(prober: &Prober, config: &BaselineConfig) -> BaselineReport {
    tracing::info!(probes = config.probes, "baseline phase starting");
    let counters = probe_loop(prober, "baseline", config.probes, config.interval()).await;
    BaselineReport { counters }
}

/// Phase 3: probe through the fault-injection window.
pub async fn run_failover_window(prober: &Prober, config: &FailoverConfig) -> FailoverReport {
    tracing::info!(
        probes = config.probes,
        interval_ms = config.interval_ms,
        "failover window starting"
    );
    let counters = probe_loop(prober, "failover", config.probes, config.interval()).await;
    FailoverReport::new(counters, config.green_threshold)
}

/// Phase 5: observe traffic returning to blue after fault removal.
pub async fn run_recovery(prober: &Prober, config: &RecoveryConfig) -> RecoveryReport {
    tracing::info!(probes = config.probes, "recovery phase starting");
    let counters = probe_loop(prober, "recovery", config.probes, config.interval()).await;
    RecoveryReport::new(counters, config.majority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Pool, ProbeOutcome};

    fn counters(outcomes: &[(Option<u16>, Pool)]) -> PhaseCounters {
        let mut c = PhaseCounters::new();
        for &(status, pool) in outcomes {
            c.record(&ProbeOutcome { status, pool });
        }
        c
    }

    fn n_probes(n: usize, status: Option<u16>, pool: Pool) -> Vec<(Option<u16>, Pool)> {
        vec![(status, pool); n]
    }

    #[test]
    fn test_baseline_requires_every_probe_on_blue() {
        let all_blue = BaselineReport {
            counters: counters(&n_probes(5, Some(200), Pool::Blue)),
        };
        assert!(all_blue.all_primary());

        let mut mixed = n_probes(4, Some(200), Pool::Blue);
        mixed.push((Some(200), Pool::Green));
        let report = BaselineReport {
            counters: counters(&mixed),
        };
        assert!(!report.all_primary());
    }

    #[test]
    fn test_empty_baseline_does_not_pass() {
        let report = BaselineReport {
            counters: PhaseCounters::new(),
        };
        assert!(!report.all_primary());
    }

    #[test]
    fn test_zero_downtime_requires_all_successes() {
        let perfect = FailoverReport::new(counters(&n_probes(20, Some(200), Pool::Green)), 0.95);
        assert!(perfect.zero_downtime());

        for failing in 0..20 {
            let mut outcomes = n_probes(failing, Some(200), Pool::Green);
            outcomes.extend(n_probes(20 - failing, Some(500), Pool::Green));
            let report = FailoverReport::new(counters(&outcomes), 0.95);
            assert!(!report.zero_downtime(), "{failing} successes must not pass");
        }
    }

    #[test]
    fn test_failover_threshold_is_19_of_20() {
        let mut outcomes = n_probes(19, Some(200), Pool::Green);
        outcomes.push((Some(200), Pool::Blue));
        let at_threshold = FailoverReport::new(counters(&outcomes), 0.95);
        assert!(at_threshold.failover_holds());

        let mut outcomes = n_probes(18, Some(200), Pool::Green);
        outcomes.extend(n_probes(2, Some(200), Pool::Blue));
        let below = FailoverReport::new(counters(&outcomes), 0.95);
        assert!(!below.failover_holds());
    }

    #[test]
    fn test_failover_verdicts_are_independent() {
        // All probes green but one of them a 500: routing held, uptime did not.
        let mut outcomes = n_probes(19, Some(200), Pool::Green);
        outcomes.push((Some(500), Pool::Green));
        let report = FailoverReport::new(counters(&outcomes), 0.95);
        assert!(report.failover_holds());
        assert!(!report.zero_downtime());
    }

    #[test]
    fn test_recovery_majority() {
        let mut outcomes = n_probes(3, Some(200), Pool::Blue);
        outcomes.extend(n_probes(2, Some(200), Pool::Green));
        let report = RecoveryReport::new(counters(&outcomes), 3);
        assert!(report.recovered());

        let mut outcomes = n_probes(2, Some(200), Pool::Blue);
        outcomes.extend(n_probes(3, Some(200), Pool::Green));
        let report = RecoveryReport::new(counters(&outcomes), 3);
        assert!(!report.recovered());
    }
}
