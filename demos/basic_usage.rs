// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;

fn main() {
    println!("=== Decimal Matcher Example ===\n");

    // Default limits: 11 total digits, no decimal-place rule
    let default_matcher = DecimalNumberMatcher::with_defaults();

    println!("Default configuration (max 11 digits):");
    for input in ["12345678901", "123456789012", "3.14159", "not-a-number"] {
        report(&default_matcher, Some(input));
    }

    // Two-limit configuration: at most 4 digits, at most 2 decimal places
    let strict_matcher = DecimalNumberMatcher::new(MatcherConfig::limits(4, 2));

    println!("\nStrict configuration (max 4 digits, 2 decimal places):");
    for input in ["99.99", "999.99", "1.234", "999.999"] {
        report(&strict_matcher, Some(input));
    }

    // Absent optional values are always valid
    println!("\nAbsent value:");
    report(&strict_matcher, None);
}

fn report(matcher: &DecimalNumberMatcher, value: Option<&str>) {
    let result = matcher.match_value(value);
    let label = value.unwrap_or("<absent>");

    if result.is_valid() {
        println!("  {:>14} -> valid", label);
    } else {
        println!("  {:>14} -> {} violation(s)", label, result.len());
        for violation in &result {
            println!("{:18}{}: {}", "", violation.code(), violation.message());
        }
    }
}
