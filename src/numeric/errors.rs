// ============================================================================
// Parse Errors
// Error types for decimal text parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a decimal numeral from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input string was empty
    Empty,
    /// Input is not a well-formed decimal numeral, or lies outside the
    /// representable range of the underlying decimal type
    InvalidFormat,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty input: no decimal numeral to parse"),
            ParseError::InvalidFormat => {
                write!(f, "invalid format: input is not a valid decimal numeral")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::Empty.to_string(),
            "empty input: no decimal numeral to parse"
        );
        assert_eq!(
            ParseError::InvalidFormat.to_string(),
            "invalid format: input is not a valid decimal numeral"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::Empty, ParseError::Empty);
        assert_ne!(ParseError::Empty, ParseError::InvalidFormat);
    }
}
