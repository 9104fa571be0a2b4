//! The end-to-end run: fetch, extract, report, render, persist

use anyhow::Context;
use chrono::Local;
use prflow_core::{output, BranchGraph, Config, DotRenderer, RepoRef, Secrets};
use prflow_github::GitHubClient;

use crate::report;

/// Fetch PRs (and optionally branches) for `repo` and write the DOT graph
///
/// A failed PR fetch ends the run; a failed branch fetch only loses the
/// orphan branches.
pub async fn run(repo: &RepoRef, show_all_branches: bool, config: &Config) -> anyhow::Result<()> {
    let token = Secrets::github_token().context("Failed to load GitHub token")?;
    let client = GitHubClient::with_api_url(&config.github.api_url, repo, token)
        .context("Failed to create GitHub client")?;

    println!("Fetching open PRs from {}...", repo);
    let prs = client
        .list_open_change_requests()
        .await
        .context("Failed to fetch open pull requests")?;
    println!("Found {} open PRs", prs.len());

    let mut graph = BranchGraph::from_change_requests(&prs);

    if show_all_branches {
        println!("Fetching branches from {}...", repo);
        let branches = client.list_branches().await?;
        println!("Found {} branches", branches.len());
        graph = graph.with_orphans(branches, &prs);
    }

    print!("{}", report::format_summary(&prs, &config.graph));

    let dot = DotRenderer::new(&config.graph).render(&graph);
    let files = output::write_graph(&config.output.dir, Local::now().date_naive(), &dot)
        .context("Failed to write DOT file")?;

    print!("{}", report::format_instructions(&files, prs.len(), &graph));

    Ok(())
}
