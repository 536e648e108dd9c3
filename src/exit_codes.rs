//! Exit code constants for the changed-code-files CLI.
//!
//! - 0: Success (including "no code files changed")
//! - 1: No changed files could be determined at all
//! - 2: User error (bad environment value, invalid config)
//! - 3: The remote API returned a response that breaks its contract

/// Successful execution. Printed list may be empty.
pub const SUCCESS: i32 = 0;

/// Nothing to compare against: the changed-file set came back empty.
pub const NO_CHANGED_FILES: i32 = 1;

/// User error: invalid environment value, unreadable or invalid config.
pub const USER_ERROR: i32 = 2;

/// Malformed remote response: undecodable body, PR without commits, commit without parents.
pub const MALFORMED_RESPONSE: i32 = 3;
