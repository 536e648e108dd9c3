//! Changed-file resolution against the remote comparison API.
//!
//! The two ways of finding the comparison endpoints (a pull request's base
//! commit, or the pipeline's default branch) are modelled as a
//! [`RefStrategy`]. Both end in the same `compare_files` call.
//!
//! Failure handling:
//! - Non-success status or unreachable API: logged, empty result
//! - Undecodable body, PR without commits, first commit without parents:
//!   `ResolverError::MalformedResponse` (exit 3)

mod fetch;
mod strategy;


// Re-export public API
pub use fetch::changed_files;
pub use strategy::RefStrategy;
