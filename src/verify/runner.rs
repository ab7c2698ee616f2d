//! Sequential verification run.
//!
//! # Responsibilities
//! - Orchestrate the five phases in order
//! - Abort on baseline violation before any fault is injected
//! - Always attempt fault removal once injection has happened
//! - Assemble the final report and exit code

use tokio::time::sleep;

use crate::chaos::{ChaosClient, ChaosError};
use crate::config::VerifyConfig;
use crate::probe::{Prober, ProberError};
use crate::verify::phases::{
    run_baseline, run_failover_window, run_recovery, BaselineReport, FailoverReport,
    RecoveryReport,
};

/// Error type for run setup and fault-injection control.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Prober(#[from] ProberError),

    #[error(transparent)]
    Chaos(#[from] ChaosError),
}

/// Everything one run observed, for the summary and the exit code.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub baseline: BaselineReport,
    pub failover: Option<FailoverReport>,
    pub recovery: Option<RecoveryReport>,
}

impl VerificationReport {
    /// True when the run stopped at the baseline phase.
    pub fn aborted(&self) -> bool {
        !self.baseline.all_primary()
    }

    /// Overall verdict: zero-downtime and failover must both hold. The
    /// recovery phase is informational and never gates this.
    pub fn passed(&self) -> bool {
        self.failover
            .as_ref()
            .is_some_and(|f| f.zero_downtime() && f.failover_holds())
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// One configured verification run against a live deployment.
pub struct VerificationRun {
    config: VerifyConfig,
    prober: Prober,
    chaos: ChaosClient,
}

impl VerificationRun {
    pub fn new(config: VerifyConfig) -> Result<Self, RunError> {
        let prober = Prober::new(&config.endpoints, &config.http)?;
        let chaos = ChaosClient::new(&config.endpoints, &config.http)?;

        Ok(Self {
            config,
            prober,
            chaos,
        })
    }

    /// Execute the full procedure.
    ///
    /// Returns `Err` only when fault injection cannot be started; probe
    /// failures and missed thresholds are folded into the report. A failed
    /// stop during cleanup is logged and swallowed so the report (and the
    /// recovery observations) still land.
    pub async fn run(&self) -> Result<VerificationReport, RunError> {
        // Phase 1: baseline. A violation invalidates everything that
        // follows, so no fault is ever injected.
        let baseline = run_baseline(&self.prober, &self.config.baseline).await;
        if !baseline.all_primary() {
            tracing::error!(
                blue = baseline.counters.blue,
                attempts = baseline.counters.attempts,
                "baseline violated: primary pool is not serving all traffic, aborting"
            );
            return Ok(VerificationReport {
                baseline,
                failover: None,
                recovery: None,
            });
        }
        tracing::info!(probes = baseline.counters.attempts, "baseline holds");

        // Phase 2: inject the fault and give the routing layer time to
        // notice it.
        self.chaos.start(&self.config.chaos.mode).await.map_err(|e| {
            tracing::error!(error = %e, "could not start fault injection");
            e
        })?;
        sleep(self.config.failover.settle()).await;

        // Phase 3: probe through the fault window. Verdicts are recorded,
        // never acted on, so cleanup below always runs.
        let failover = run_failover_window(&self.prober, &self.config.failover).await;
        tracing::info!(
            successes = failover.counters.successes,
            green = failover.counters.green,
            attempts = failover.counters.attempts,
            zero_downtime = failover.zero_downtime(),
            failover_holds = failover.failover_holds(),
            "failover window complete"
        );

        // Phase 4: remove the fault. Recovery propagation is slower than
        // fault detection, hence the longer settle.
        if let Err(e) = self.chaos.stop().await {
            tracing::warn!(error = %e, "could not stop fault injection");
        }
        sleep(self.config.recovery.settle()).await;

        // Phase 5: advisory recovery observation.
        let recovery = run_recovery(&self.prober, &self.config.recovery).await;
        if recovery.recovered() {
            tracing::info!(
                blue = recovery.counters.blue,
                attempts = recovery.counters.attempts,
                "traffic recovered to primary pool"
            );
        } else {
            tracing::warn!(
                blue = recovery.counters.blue,
                attempts = recovery.counters.attempts,
                "partial recovery only"
            );
        }

        Ok(VerificationReport {
            baseline,
            failover: Some(failover),
            recovery: Some(recovery),
        })
    }
}
