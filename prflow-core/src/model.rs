//! Pull request and edge types

use serde::{Deserialize, Serialize};

/// An open pull request, as reported by the hosting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// PR number
    pub id: u64,
    /// PR title
    pub title: String,
    /// Head branch name
    pub source_branch: String,
    /// Base branch name
    pub target_branch: String,
}

impl ChangeRequest {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        source_branch: impl Into<String>,
        target_branch: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            source_branch: source_branch.into(),
            target_branch: target_branch.into(),
        }
    }

    /// A PR whose head and base are the same branch
    pub fn is_self_referential(&self) -> bool {
        self.source_branch == self.target_branch
    }
}

/// A merge edge derived from one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub id: u64,
    /// Title with `"` already escaped for DOT
    pub title: String,
}
