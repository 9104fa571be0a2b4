//! Error types for GitHub operations

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("GitHub API error: {}", .status.as_u16())]
    Status { status: StatusCode },

    /// 404 on an unauthenticated request
    #[error(
        "GitHub API error: 404\n\
         Note: This might be a private repo. Set GITHUB_TOKEN environment variable."
    )]
    NotFoundWithoutToken,

    /// Invalid API base URL
    #[error("Invalid GitHub API URL: {0}")]
    Url(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err.to_string())
    }
}

impl Error {
    /// Map a failed status, adding the private-repo hint where it applies
    pub(crate) fn from_status(status: StatusCode, authenticated: bool) -> Self {
        if status == StatusCode::NOT_FOUND && !authenticated {
            Error::NotFoundWithoutToken
        } else {
            Error::Status { status }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_without_token_has_hint() {
        let err = Error::from_status(StatusCode::NOT_FOUND, false);
        let msg = err.to_string();
        assert!(msg.starts_with("GitHub API error: 404"));
        assert!(msg.contains("private repo"));
        assert!(msg.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_not_found_with_token_has_no_hint() {
        let err = Error::from_status(StatusCode::NOT_FOUND, true);
        assert_eq!(err.to_string(), "GitHub API error: 404");
    }

    #[test]
    fn test_other_status() {
        let err = Error::from_status(StatusCode::FORBIDDEN, false);
        assert_eq!(err.to_string(), "GitHub API error: 403");
    }
}
