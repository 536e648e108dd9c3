//! Wire types for the GitHub REST responses we read.
//!
//! Only the fields the resolver needs are declared; everything else in the
//! response bodies is ignored.

use serde::Deserialize;

/// Reference to a commit by SHA (used for parents).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// One entry of the pull request commit list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestCommit {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<CommitRef>,
}

/// A file-change record in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangedFile {
    /// Repository-relative path (forward slashes).
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    #[serde(default)]
    pub status: Option<String>,
}

/// Result of comparing two refs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

impl Comparison {
    /// Filenames in the order the API returned them.
    pub fn filenames(&self) -> Vec<String> {
        self.files.iter().map(|f| f.filename.clone()).collect()
    }
}

/// Body GitHub returns alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
