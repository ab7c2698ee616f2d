//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (probe counts >= 1, threshold in (0, 1])
//! - Check internal consistency (recovery majority fits in probe count)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VerifyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the run

use url::Url;

use crate::config::schema::VerifyConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be at least 1")]
    ZeroProbes { field: &'static str },

    #[error("failover.green_threshold must be within (0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("recovery.majority ({majority}) exceeds recovery.probes ({probes})")]
    MajorityTooLarge { majority: usize, probes: usize },

    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
}

/// Validate the full configuration, collecting every violation.
pub fn validate_config(config: &VerifyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, probes) in [
        ("baseline.probes", config.baseline.probes),
        ("failover.probes", config.failover.probes),
        ("recovery.probes", config.recovery.probes),
    ] {
        if probes == 0 {
            errors.push(ValidationError::ZeroProbes { field });
        }
    }

    let threshold = config.failover.green_threshold;
    if !(threshold > 0.0 && threshold <= 1.0) {
        errors.push(ValidationError::ThresholdOutOfRange(threshold));
    }

    if config.recovery.majority > config.recovery.probes {
        errors.push(ValidationError::MajorityTooLarge {
            majority: config.recovery.majority,
            probes: config.recovery.probes,
        });
    }

    for (field, url) in [
        ("endpoints.service_url", &config.endpoints.service_url),
        ("endpoints.chaos_url", &config.endpoints.chaos_url),
    ] {
        if let Err(e) = Url::parse(url) {
            errors.push(ValidationError::InvalidUrl {
                field,
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
