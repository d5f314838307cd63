// ============================================================================
// Interfaces Module
// Trait contracts consumed by matcher implementations
// ============================================================================

mod value_matcher;

pub use value_matcher::ValueMatcher;
