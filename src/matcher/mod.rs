// ============================================================================
// Matcher Module
// Rule engine implementations
// ============================================================================

mod decimal_number;

pub use decimal_number::DecimalNumberMatcher;
