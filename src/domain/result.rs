// ============================================================================
// Validation Result
// Ordered, append-only container of rule violations
// ============================================================================

use super::catalog::RuleViolation;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accumulated outcome of one validation pass.
///
/// Violations are kept in insertion order and can never be removed. A result
/// with no entries means the value passed every rule. One `match_value` call
/// produces at most two entries (the format rule suppresses the others), so
/// the backing store is a `SmallVec` that never heap-allocates on that path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    errors: SmallVec<[RuleViolation; 2]>,
}

impl ValidationResult {
    /// Create an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule violation. Insertion order is preserved.
    pub fn append(&mut self, violation: RuleViolation) {
        self.errors.push(violation);
    }

    /// True when no rule was violated.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when the result holds no entries. Alias of `is_valid`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Read-only view of the recorded violations, in insertion order.
    #[inline]
    pub fn errors(&self) -> &[RuleViolation] {
        &self.errors
    }

    /// Check whether a violation with the given error code was recorded.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|v| v.code() == code)
    }

    /// The recorded error codes, in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|v| v.code())
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a RuleViolation;
    type IntoIter = std::slice::Iter<'a, RuleViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
