// ============================================================================
// Parsed Number
// Exact-precision decimal value with digit-count queries
// ============================================================================

use super::errors::{ParseError, ParseResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// An exact-precision decimal number parsed from text.
///
/// Wraps `rust_decimal::Decimal` in its canonical form: trailing fractional
/// zeros are stripped on construction, so `"1.50"` and `"1.5"` parse to the
/// same value with the same digit counts. No binary floating point is
/// involved anywhere; digit counting is exact.
///
/// Values are transient: a `ParsedNumber` is produced from one input string,
/// queried for its digit counts, and dropped. It is never persisted.
///
/// # Example
/// ```rust
/// use decimal_matcher::numeric::ParsedNumber;
///
/// let n = ParsedNumber::parse("123.45").unwrap();
/// assert_eq!(n.significant_digits(), 5);
/// assert_eq!(n.decimal_places(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber(Decimal);

impl ParsedNumber {
    /// Parse a decimal numeral from text.
    ///
    /// The decimal separator is always `.`. Scientific notation, grouping
    /// separators, and surrounding whitespace are all rejected. The parsed
    /// value is normalized immediately, which strips trailing fractional
    /// zeros and maps `-0` to `0`.
    ///
    /// # Errors
    /// - `Empty` if the input string has no characters
    /// - `InvalidFormat` if the input is not a well-formed decimal numeral
    ///   or cannot be represented by the underlying decimal type
    pub fn parse(text: &str) -> ParseResult<Self> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        Decimal::from_str(text)
            .map(|value| Self(value.normalize()))
            .map_err(|_| ParseError::InvalidFormat)
    }

    /// Total count of significant digits, integer and fractional combined.
    ///
    /// The sign and the decimal separator are excluded. Leading zeros do not
    /// count (`"0.005"` has 1 significant digit) and trailing fractional
    /// zeros were already stripped by normalization, but trailing *integer*
    /// zeros do count (`"100"` has 3). Zero counts as a single digit.
    #[inline]
    pub fn significant_digits(&self) -> u32 {
        let mantissa = self.0.mantissa().unsigned_abs();
        if mantissa == 0 {
            1
        } else {
            mantissa.ilog10() + 1
        }
    }

    /// Count of digits after the decimal separator, in canonical form.
    ///
    /// `"1.50"` reports 1 decimal place, not 2.
    #[inline]
    pub fn decimal_places(&self) -> u32 {
        self.0.scale()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The underlying decimal value.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
