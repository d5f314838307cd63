// ============================================================================
// Decimal Matcher Library
// Decimal number validation with configurable precision constraints
// ============================================================================

//! # Decimal Matcher
//!
//! Validates that a textual input represents a decimal number satisfying
//! configurable precision constraints, reporting every violation as data
//! instead of panicking or returning early errors.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** via `rust_decimal` — digit counting is
//!   never subject to binary floating-point rounding
//! - **Closed error catalog** with stable error codes (`doubleNumber.e001`
//!   through `e003`)
//! - **Independent rule checks** — a value can violate the digit and the
//!   decimal-place rule at once, and both are reported
//! - **Stateless matching** — one matcher instance is safe to share and to
//!   call from multiple threads; each call yields a fresh result
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! // Up to 4 total digits, up to 2 decimal places
//! let matcher = DecimalNumberMatcher::new(MatcherConfig::limits(4, 2));
//!
//! // Absent optional values are always valid
//! assert!(matcher.match_value(None).is_valid());
//! assert!(matcher.match_value(Some("99.99")).is_valid());
//!
//! // Violations come back as (code, message) entries, never as panics
//! let result = matcher.match_value(Some("999.999"));
//! for violation in &result {
//!     println!("{}: {}", violation.code(), violation.message());
//! }
//! assert_eq!(result.len(), 2);
//! ```

pub mod domain;
pub mod interfaces;
pub mod matcher;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{MatcherConfig, RuleViolation, ValidationResult, DEFAULT_MAX_DIGITS};
    pub use crate::interfaces::ValueMatcher;
    pub use crate::matcher::DecimalNumberMatcher;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_validation_flow() {
        let matcher = DecimalNumberMatcher::new(MatcherConfig::limits(4, 2));

        // Valid value: clean result
        let ok = matcher.match_value(Some("12.34"));
        assert!(ok.is_valid());

        // Unparseable value: format error suppresses the other rules
        let garbage = matcher.match_value(Some("1.2.3"));
        assert_eq!(garbage.codes().collect::<Vec<_>>(), vec!["doubleNumber.e001"]);

        // Double violation: both rules reported, in rule order
        let both = matcher.match_value(Some("12345.678"));
        assert_eq!(
            both.codes().collect::<Vec<_>>(),
            vec!["doubleNumber.e002", "doubleNumber.e003"]
        );

        // The same matcher instance stays clean afterwards
        assert!(matcher.match_value(Some("1")).is_valid());
    }

    #[test]
    fn test_matcher_shared_across_threads() {
        use std::sync::Arc;

        let matcher = Arc::new(DecimalNumberMatcher::with_defaults());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let matcher = Arc::clone(&matcher);
                std::thread::spawn(move || {
                    let text = format!("123456789012.{}", i);
                    let result = matcher.match_value(Some(&text));
                    assert_eq!(result.codes().collect::<Vec<_>>(), vec!["doubleNumber.e002"]);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_violation_messages_match_catalog() {
        let matcher = DecimalNumberMatcher::with_defaults();
        let result = matcher.match_value(Some("not-a-number"));

        let errors: Vec<(&str, &str)> = result
            .errors()
            .iter()
            .map(|v| (v.code(), v.message()))
            .collect();
        assert_eq!(
            errors,
            vec![(
                "doubleNumber.e001",
                "The value is not a valid decimal number."
            )]
        );
    }
}
