//! Human-readable run summary.
//!
//! # Responsibilities
//! - Print per-phase observations and the final verdict to stdout
//!
//! # Design Decisions
//! - Diagnostic output for humans only; the machine-readable artifact of a
//!   run is the process exit code

use crate::verify::VerificationReport;

fn verdict(holds: bool) -> &'static str {
    if holds {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Print the end-of-run summary.
pub fn print_summary(report: &VerificationReport) {
    println!();
    println!("=== failover verification summary ===");

    let b = &report.baseline.counters;
    println!("baseline:      {}/{} probes served by blue", b.blue, b.attempts);

    if report.aborted() {
        println!("verdict:       ABORTED (primary pool was not serving all baseline traffic)");
        return;
    }

    if let Some(f) = &report.failover {
        let c = &f.counters;
        println!(
            "fault window:  {}/{} probes ok, routing {} green / {} blue / {} unknown",
            c.successes, c.attempts, c.green, c.blue, c.unknown
        );
        println!(
            "  zero-downtime: {} ({:.1}% success)",
            verdict(f.zero_downtime()),
            c.success_rate() * 100.0
        );
        println!(
            "  failover:      {} ({:.1}% green, {:.1}% required)",
            verdict(f.failover_holds()),
            c.green_rate() * 100.0,
            f.green_threshold() * 100.0
        );
    }

    if let Some(r) = &report.recovery {
        let c = &r.counters;
        println!(
            "recovery:      {}/{} probes back on blue ({})",
            c.blue,
            c.attempts,
            if r.recovered() { "successful" } else { "partial" }
        );
    }

    println!("verdict:       {}", verdict(report.passed()));
}
