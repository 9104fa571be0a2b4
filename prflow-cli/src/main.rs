//! prflow CLI - render open pull requests as a Graphviz branch graph

mod generate;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prflow_core::{config::CliOverrides, Config, RepoRef};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Visualize which branch merges into which, based on open pull requests
#[derive(Parser, Debug)]
#[command(name = "prflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository in 'owner/name' format
    #[arg(env = "GITHUB_REPO", value_name = "OWNER/NAME")]
    repo: RepoRef,

    /// Also show branches that have no open pull request
    #[arg(short = 'a', long)]
    show_all_branches: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory that receives dot/, png/ and svg/ (defaults to the current directory)
    #[arg(short, long, env = "PRFLOW_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "PRFLOW_API_URL")]
    api_url: Option<String>,

    /// Maximum PR title length before truncation
    #[arg(long)]
    max_title_length: Option<usize>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the report; diagnostics go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load_with_overrides(CliOverrides {
        api_url: cli.api_url,
        output_dir: cli.output_dir,
        max_title_length: cli.max_title_length,
    })
    .context("Failed to load configuration")?;

    if cli.verbose {
        tracing::info!(
            repo = %cli.repo,
            api_url = %config.github.api_url,
            output_dir = %config.output.dir.display(),
            max_title_length = config.graph.max_title_length,
            "Configuration loaded"
        );
    }

    generate::run(&cli.repo, cli.show_all_branches, &config).await
}
