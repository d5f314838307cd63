// ============================================================================
// Matcher Configuration
// Precision limits applied by the decimal number matcher
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum number of total significant digits.
pub const DEFAULT_MAX_DIGITS: u32 = 11;

/// Precision limits for a [`DecimalNumberMatcher`](crate::matcher::DecimalNumberMatcher).
///
/// The matcher historically took zero, one, or two positional parameters.
/// That maps onto an explicit pair here, which makes the three forms
/// type-checkable instead of index-based:
///
/// - no parameters → [`MatcherConfig::default()`]: at most 11 total digits,
///   no decimal-place limit
/// - one parameter → [`MatcherConfig::max_digits`]: replaces the digit limit
/// - two parameters → [`MatcherConfig::limits`]: digit limit plus a
///   decimal-place limit, both enforced together
///
/// The configuration is fixed at construction; only accessors are exposed.
/// Limits are not themselves validated (the caller is trusted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatcherConfig {
    /// Maximum total count of significant digits
    max_digits: u32,

    /// Maximum count of digits after the decimal separator.
    /// None means the decimal-places rule is inactive.
    max_decimal_places: Option<u32>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            max_decimal_places: None,
        }
    }
}

impl MatcherConfig {
    /// Limit total digits only, leaving the decimal-places rule inactive.
    pub fn max_digits(max_digits: u32) -> Self {
        Self {
            max_digits,
            max_decimal_places: None,
        }
    }

    /// Limit both total digits and decimal places.
    pub fn limits(max_digits: u32, max_decimal_places: u32) -> Self {
        Self {
            max_digits,
            max_decimal_places: Some(max_decimal_places),
        }
    }

    /// Builder method: activate the decimal-places rule.
    pub fn with_max_decimal_places(mut self, max_decimal_places: u32) -> Self {
        self.max_decimal_places = Some(max_decimal_places);
        self
    }

    /// The configured digit limit.
    #[inline]
    pub fn digit_limit(&self) -> u32 {
        self.max_digits
    }

    /// The configured decimal-place limit, if the rule is active.
    #[inline]
    pub fn decimal_place_limit(&self) -> Option<u32> {
        self.max_decimal_places
    }
}
