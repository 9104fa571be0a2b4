//! prflow core - branch relationship model for open pull requests
//!
//! This crate turns a list of pull requests into a branch graph and renders
//! it as a Graphviz DOT description. It knows nothing about HTTP; fetching
//! lives in `prflow-github`.

pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod model;
pub mod output;
pub mod repo;
pub mod secrets;

pub use config::{Config, GraphConfig};
pub use dot::DotRenderer;
pub use error::{Error, Result};
pub use graph::BranchGraph;
pub use model::{ChangeRequest, Edge};
pub use output::GraphFiles;
pub use repo::RepoRef;
pub use secrets::Secrets;
