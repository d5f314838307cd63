// ============================================================================
// Numeric Module
// Exact-precision decimal parsing boundary
// ============================================================================
//
// This module provides:
// - ParsedNumber: a rust_decimal-backed decimal value in canonical form
// - ParseError: error types for text parsing
//
// Design principles:
// - No floating-point operations; digit counting is exact
// - Parsing returns Result (no panics)
// - Values are transient, produced and consumed within one match call

mod errors;
mod parsed_number;

pub use errors::{ParseError, ParseResult};
pub use parsed_number::ParsedNumber;
