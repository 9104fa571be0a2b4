//! Branch relationship extraction
//!
//! A [`BranchGraph`] is derived from the list of open pull requests: every
//! PR contributes one edge from its head branch to its base branch, except
//! PRs whose head and base are the same branch.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{ChangeRequest, Edge};

/// Branches, merge targets and edges derived from a set of PRs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchGraph {
    /// Every branch that is an endpoint of some edge
    pub branches: BTreeSet<String>,
    /// Branches that appear as a merge target
    pub targets: BTreeSet<String>,
    /// Edges in fetch order
    pub edges: Vec<Edge>,
    /// Repository branches untouched by any PR, when requested
    pub orphans: Option<BTreeSet<String>>,
}

impl BranchGraph {
    /// Build the graph from PRs, skipping self-referential ones
    pub fn from_change_requests(change_requests: &[ChangeRequest]) -> Self {
        let mut graph = Self::default();

        for cr in change_requests {
            if cr.is_self_referential() {
                debug!(id = cr.id, branch = %cr.source_branch, "Skipping self-referential PR");
                continue;
            }

            graph.branches.insert(cr.source_branch.clone());
            graph.branches.insert(cr.target_branch.clone());
            graph.targets.insert(cr.target_branch.clone());
            graph.edges.push(Edge {
                source: cr.source_branch.clone(),
                target: cr.target_branch.clone(),
                id: cr.id,
                title: escape_title(&cr.title),
            });
        }

        debug!(
            branches = graph.branches.len(),
            edges = graph.edges.len(),
            "Extracted branch graph"
        );

        graph
    }

    /// Attach the branches of `all_branches` that no PR touches
    pub fn with_orphans<I, S>(mut self, all_branches: I, change_requests: &[ChangeRequest]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orphans = Some(orphan_branches(all_branches, change_requests));
        self
    }

    /// Branches that appear as the head of some edge
    pub fn sources(&self) -> BTreeSet<&str> {
        self.edges.iter().map(|e| e.source.as_str()).collect()
    }

    /// Targets that are never a source and whose name has a primary segment
    pub fn primary_branches<'a>(&'a self, is_primary_name: impl Fn(&str) -> bool) -> Vec<&'a str> {
        let sources = self.sources();
        self.targets
            .iter()
            .map(String::as_str)
            .filter(|b| !sources.contains(b) && is_primary_name(*b))
            .collect()
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.as_ref().map_or(0, BTreeSet::len)
    }
}

/// All branches minus those referenced by any PR, self-referential ones included
pub fn orphan_branches<I, S>(all_branches: I, change_requests: &[ChangeRequest]) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let referenced: BTreeSet<&str> = change_requests
        .iter()
        .flat_map(|cr| [cr.source_branch.as_str(), cr.target_branch.as_str()])
        .collect();

    all_branches
        .into_iter()
        .map(Into::into)
        .filter(|b| !referenced.contains(b.as_str()))
        .collect()
}

/// Escape `"` so the title can sit inside a quoted DOT string
pub fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}
