//! Console report: PR summary and post-run instructions

use std::fmt::Write;

use prflow_core::{BranchGraph, ChangeRequest, GraphConfig, GraphFiles};

/// One entry per PR: number, head -> base, then the truncated title
pub fn format_summary(prs: &[ChangeRequest], config: &GraphConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "PR Summary:");
    let _ = writeln!(out, "{}", "-".repeat(80));

    for pr in prs {
        let _ = writeln!(
            out,
            "#{:04}: {:<30} -> {:<30}",
            pr.id, pr.source_branch, pr.target_branch
        );
        let _ = writeln!(out, "       {}", config.truncate_title(&pr.title));
        let _ = writeln!(out);
    }

    out
}

/// Where the graph went, how big it is, and how to render it
pub fn format_instructions(files: &GraphFiles, pr_count: usize, graph: &BranchGraph) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Generated {}", files.dot_file.display());
    let _ = writeln!(out, "Total PRs: {}", pr_count);
    let _ = writeln!(out, "Unique branches: {}", graph.branches.len());
    if graph.orphans.is_some() {
        let _ = writeln!(out, "Orphan branches: {}", graph.orphan_count());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "To visualize, run:");
    for command in files.render_commands() {
        let _ = writeln!(out, "  {}", command);
    }

    out
}
