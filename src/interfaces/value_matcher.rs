// ============================================================================
// Value Matcher Interface
// Defines the contract for pluggable validation matchers
// ============================================================================

use crate::domain::ValidationResult;

/// Strategy pattern interface for value matchers.
///
/// A matcher inspects a single optional textual value and reports every rule
/// violation as data. Implementations never panic and never return an error
/// through the call itself; an unparseable or out-of-limit value is a normal
/// outcome recorded in the [`ValidationResult`].
pub trait ValueMatcher: Send + Sync {
    /// Validate one value.
    ///
    /// # Arguments
    /// * `value` - The textual value, or `None` when the field is absent.
    ///   Absence is always valid; required-field checking belongs to a
    ///   separate rule outside this matcher.
    ///
    /// # Returns
    /// A fresh result holding zero or more rule violations in the order
    /// they were detected.
    fn match_value(&self, value: Option<&str>) -> ValidationResult;

    /// Get the matcher name for logging/metrics.
    fn name(&self) -> &str;
}
