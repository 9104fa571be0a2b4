//! prflow GitHub - REST access for prflow
//!
//! This crate lists the open pull requests and the branches of a repository
//! through GitHub's paginated REST endpoints.

mod branches;
mod client;
mod error;
mod paginate;
mod pulls;

pub use client::GitHubClient;
pub use error::{Error, Result};
