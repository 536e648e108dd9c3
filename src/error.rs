//! Error types for the changed-code-files CLI.
//!
//! Uses thiserror for derive macros. Remote call failures are not errors here:
//! they are recovered inside the fetch and turn into an empty change set.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for changed-code-files operations.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Invalid environment value, invalid config, or an output failure.
    #[error("{0}")]
    UserError(String),

    /// The remote API answered successfully but the body breaks its contract.
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}

impl ResolverError {
    /// Build a malformed-response error for the given endpoint.
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolverError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolverError::UserError(_) => exit_codes::USER_ERROR,
            ResolverError::MalformedResponse { .. } => exit_codes::MALFORMED_RESPONSE,
        }
    }
}

/// Result type alias for changed-code-files operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ResolverError::UserError("bad pull request number".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn malformed_response_has_correct_exit_code() {
        let err = ResolverError::malformed("pulls/7/commits", "empty commit list");
        assert_eq!(err.exit_code(), exit_codes::MALFORMED_RESPONSE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ResolverError::malformed("pulls/7/commits", "first commit has no parents");
        assert_eq!(
            err.to_string(),
            "Malformed response from pulls/7/commits: first commit has no parents"
        );

        let err = ResolverError::UserError("invalid config".to_string());
        assert_eq!(err.to_string(), "invalid config");
    }
}
