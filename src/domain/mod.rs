// ============================================================================
// Domain Module
// Core data model: configuration, error catalog, validation result
// ============================================================================

pub mod catalog;
pub mod config;
pub mod result;

pub use catalog::RuleViolation;
pub use config::{MatcherConfig, DEFAULT_MAX_DIGITS};
pub use result::ValidationResult;
