//! Repository branch listing

use serde::Deserialize;
use tracing::info;

use crate::{paginate::FailurePolicy, GitHubClient, Result};

#[derive(Debug, Deserialize)]
struct BranchRecord {
    name: String,
}

impl GitHubClient {
    /// List the names of all branches in the repository
    ///
    /// A failed fetch is logged as a warning and yields an empty list, so
    /// callers carry on without orphan detection.
    pub async fn list_branches(&self) -> Result<Vec<String>> {
        let records: Vec<BranchRecord> = self
            .fetch_paged("branches", &[], FailurePolicy::WarnAndEmpty)
            .await?;

        let names: Vec<String> = records.into_iter().map(|b| b.name).collect();
        info!(count = names.len(), "Fetched branches");

        Ok(names)
    }
}
