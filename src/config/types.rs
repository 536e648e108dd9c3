//! Configuration constants and default value functions.

/// GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository whose pull requests and branches are compared.
pub const DEFAULT_REPOSITORY: &str = "horovod/horovod";

/// Default exclusion patterns, in match order.
///
/// The first pattern covers the pipeline's changed-file step itself:
/// `.buildkite/get_changed_code_files.py` in pipelines that still carry the
/// script, `.buildkite/get_changed_code_files.sh` where it wraps this binary.
///
/// Each is a start-anchored regex; a match on any prefix of a path makes the
/// path non-code. The `.md` and `.rst` patterns have no end anchor, so they
/// also catch paths like `notes.mdx`.
pub fn default_exclude_patterns() -> Vec<String> {
    vec![
        r"^\.buildkite/get_changed_code_files\.(py|sh)$".to_string(),
        r"^\.github/".to_string(),
        r"^docs/".to_string(),
        r"^.*\.md".to_string(),
        r"^.*\.rst".to_string(),
    ]
}

pub(crate) fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

pub(crate) fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

pub(crate) fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
