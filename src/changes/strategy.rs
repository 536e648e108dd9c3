//! Selection of how the comparison refs are derived.

use crate::context::BuildContext;

/// How the base and head of the comparison are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefStrategy {
    /// Base is the first parent of the pull request's first commit.
    PullRequestRefs { number: u64, commit: Option<String> },
    /// Base is the pipeline's default branch.
    BranchRefs { base: String, commit: Option<String> },
}

impl RefStrategy {
    /// Pick the strategy for a build.
    ///
    /// Pull request builds compare against the PR base. Other builds compare
    /// against the default branch; without one there is nothing to compare
    /// and `None` is returned.
    pub fn from_context(context: &BuildContext) -> Option<Self> {
        if let Some(number) = context.pull_request {
            return Some(RefStrategy::PullRequestRefs {
                number,
                commit: context.commit.clone(),
            });
        }

        tracing::debug!(
            "default = {}",
            context.default_branch.as_deref().unwrap_or("None")
        );

        context
            .default_branch
            .as_ref()
            .map(|base| RefStrategy::BranchRefs {
                base: base.clone(),
                commit: context.commit.clone(),
            })
    }

    /// The build commit that ends up as the head of the comparison.
    pub fn commit(&self) -> Option<&str> {
        match self {
            RefStrategy::PullRequestRefs { commit, .. }
            | RefStrategy::BranchRefs { commit, .. } => commit.as_deref(),
        }
    }
}
