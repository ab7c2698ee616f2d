//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → VerifyConfig (validated, immutable)
//!     → CLI flags override endpoint URLs
//!     → consumed by the verification run
//! ```
//!
//! # Design Decisions
//! - Every field has a default so the tool runs with no config file at all
//! - Defaults carry the canonical probe counts, pacing and thresholds
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports all violations, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    BaselineConfig, ChaosConfig, EndpointConfig, FailoverConfig, HttpClientConfig,
    RecoveryConfig, VerifyConfig,
};
