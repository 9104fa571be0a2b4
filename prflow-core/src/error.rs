//! Error types for prflow

use thiserror::Error;

/// Result type alias for prflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for prflow operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Repository identifier is not `owner/name`
    #[error("Repository must be in 'owner/name' format (e.g., 'mycompany/private-repo'), got '{0}'")]
    InvalidRepo(String),
}
