// ============================================================================
// Error Catalog
// Fixed mapping from validation rule to stable (code, message) pair
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A violated validation rule.
///
/// The catalog is closed: exactly three rules exist, and each maps to a
/// stable error code and human-readable message. The codes are part of the
/// external contract and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleViolation {
    /// Input is not a parseable decimal numeral
    InvalidFormat,
    /// Total significant digit count exceeds the configured maximum
    DigitsExceeded,
    /// Decimal-place count exceeds the configured maximum
    DecimalPlacesExceeded,
}

impl RuleViolation {
    /// Stable error code for this rule.
    pub const fn code(self) -> &'static str {
        match self {
            RuleViolation::InvalidFormat => "doubleNumber.e001",
            RuleViolation::DigitsExceeded => "doubleNumber.e002",
            RuleViolation::DecimalPlacesExceeded => "doubleNumber.e003",
        }
    }

    /// Human-readable message for this rule.
    pub const fn message(self) -> &'static str {
        match self {
            RuleViolation::InvalidFormat => "The value is not a valid decimal number.",
            RuleViolation::DigitsExceeded => "The value exceeded maximum number of digits.",
            RuleViolation::DecimalPlacesExceeded => {
                "The value exceeded maximum number of decimal places."
            },
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
