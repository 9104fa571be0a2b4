//! Graphviz DOT rendering of a [`BranchGraph`]

use std::fmt::Write;

use crate::{BranchGraph, GraphConfig};

const PRIMARY_STYLE: &str = r#"style="rounded,filled", fillcolor=lightblue, fontweight=bold"#;
const ORPHAN_STYLE: &str = r#"style="rounded,filled", fillcolor=lightyellow, fontstyle=italic"#;

/// Renders branch graphs as a left-to-right digraph of rounded boxes
#[derive(Debug, Clone)]
pub struct DotRenderer<'a> {
    config: &'a GraphConfig,
}

impl<'a> DotRenderer<'a> {
    pub fn new(config: &'a GraphConfig) -> Self {
        Self { config }
    }

    /// Produce the full DOT document
    ///
    /// Branch names are quoted as-is; a `"` inside a branch name is not escaped.
    pub fn render(&self, graph: &BranchGraph) -> String {
        let mut out = String::new();

        out.push_str("digraph PRFlow {\n");
        out.push_str("  rankdir=LR;\n");
        out.push_str("  node [shape=box, style=rounded];\n");
        out.push('\n');

        for branch in graph.primary_branches(|b| self.config.has_primary_segment(b)) {
            let _ = writeln!(out, "  \"{}\" [{}];", branch, PRIMARY_STYLE);
        }
        out.push('\n');

        if let Some(orphans) = graph.orphans.as_ref().filter(|o| !o.is_empty()) {
            for branch in orphans {
                let _ = writeln!(out, "  \"{}\" [{}];", branch, ORPHAN_STYLE);
            }
            out.push('\n');
        }

        for edge in &graph.edges {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\" [label=\"PR #{}\\n{}\"];",
                edge.source,
                edge.target,
                edge.id,
                self.label_title(&edge.title)
            );
        }

        out.push_str("}\n");
        out
    }

    /// Truncate an escaped title for an edge label, adding `...` when cut
    fn label_title(&self, escaped: &str) -> String {
        let truncated = self.config.truncate_title(escaped);
        if truncated.len() == escaped.len() {
            return truncated.to_string();
        }

        // a cut between `\` and `"` would leave the label's closing quote escaped
        let trailing = truncated.chars().rev().take_while(|c| *c == '\\').count();
        let truncated = if trailing % 2 == 1 {
            &truncated[..truncated.len() - 1]
        } else {
            truncated
        };

        format!("{}...", truncated)
    }
}
