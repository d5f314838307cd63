// ============================================================================
// Decimal Number Matcher
// Validates that a textual value denotes a decimal number within limits
// ============================================================================

use crate::domain::{MatcherConfig, RuleViolation, ValidationResult};
use crate::interfaces::ValueMatcher;
use crate::numeric::ParsedNumber;

/// Matcher validating that a string value represents a decimal number, or is
/// absent. The decimal separator is always `.`.
///
/// Three rules apply, each mapped to a stable error code:
///
/// 1. the value must parse as a decimal numeral (`doubleNumber.e001`);
/// 2. its total significant digit count must not exceed the configured
///    maximum (`doubleNumber.e002`);
/// 3. when a decimal-place limit is configured, the count of digits after
///    the separator must not exceed it (`doubleNumber.e003`).
///
/// A parse failure suppresses the other two rules, since no numeric value
/// exists to check. The digit and decimal-place rules run independently and
/// can both fire on one value.
///
/// The matcher holds only its immutable configuration; every call builds a
/// fresh [`ValidationResult`], so one instance can be shared across threads
/// and reused across calls without state leaking between validations.
///
/// # Example
/// ```rust
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalNumberMatcher::new(MatcherConfig::limits(4, 2));
///
/// assert!(matcher.match_value(Some("99.99")).is_valid());
/// assert!(matcher.match_value(None).is_valid());
///
/// let result = matcher.match_value(Some("999.999"));
/// assert!(result.has_code("doubleNumber.e002"));
/// assert!(result.has_code("doubleNumber.e003"));
/// ```
#[derive(Debug, Clone)]
pub struct DecimalNumberMatcher {
    config: MatcherConfig,
}

impl DecimalNumberMatcher {
    /// Create a matcher with the given precision limits.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create a matcher with the default limits (11 total digits, no
    /// decimal-place rule).
    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// The precision limits this matcher enforces.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Validate one value against the configured limits.
    ///
    /// `None` represents an absent optional field and is always valid.
    /// This call never panics; every failure mode becomes an entry in the
    /// returned result.
    pub fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(text) = value else {
            return result;
        };

        let number = match ParsedNumber::parse(text) {
            Ok(number) => number,
            Err(err) => {
                tracing::trace!(input = text, %err, "decimal parse failed");
                result.append(RuleViolation::InvalidFormat);
                return result;
            },
        };

        if self.exceeds_digit_limit(&number) {
            tracing::trace!(
                digits = number.significant_digits(),
                limit = self.config.digit_limit(),
                "digit limit exceeded"
            );
            result.append(RuleViolation::DigitsExceeded);
        }

        if self.exceeds_decimal_place_limit(&number) {
            result.append(RuleViolation::DecimalPlacesExceeded);
        }

        result
    }

    fn exceeds_digit_limit(&self, number: &ParsedNumber) -> bool {
        number.significant_digits() > self.config.digit_limit()
    }

    fn exceeds_decimal_place_limit(&self, number: &ParsedNumber) -> bool {
        match self.config.decimal_place_limit() {
            Some(limit) => number.decimal_places() > limit,
            None => false,
        }
    }
}

impl Default for DecimalNumberMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ValueMatcher for DecimalNumberMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        DecimalNumberMatcher::match_value(self, value)
    }

    fn name(&self) -> &str {
        "DecimalNumberMatcher"
    }
}

// ============================================================================
// Tests
// ============================================================================
