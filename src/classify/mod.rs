//! Code/non-code classification of changed paths.
//!
//! A path is non-code when any exclusion pattern matches it starting at the
//! first character (a prefix match, not a full-string match). Every other path
//! is code. Classification is pure: the compiled pattern set is immutable once
//! built.
//!
//! Error handling:
//! - Invalid regex patterns are config errors (exit 2)

mod patterns;


// Re-export public API
pub use patterns::ExclusionPatterns;
