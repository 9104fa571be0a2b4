//! GitHub token lookup
//!
//! `GITHUB_TOKEN` decides. Only when it is unset or blank does prflow read
//! `~/.config/prflow/secrets.toml`, which on Unix must not be accessible to
//! group or others. No token at all is fine: requests go out
//! unauthenticated and private repositories answer 404.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Contents of `secrets.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Secrets {
    pub github: GitHubSecrets,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubSecrets {
    pub token: Option<String>,
}

impl Secrets {
    /// Token for this run, from `GITHUB_TOKEN` or else the secrets file
    ///
    /// The secrets file is not touched while the environment provides a
    /// token, so a badly permissioned file cannot fail such a run.
    pub fn github_token() -> Result<Option<String>> {
        resolve_token(
            std::env::var(TOKEN_ENV).ok(),
            Self::default_secrets_path().as_deref(),
        )
    }

    /// `<config dir>/prflow/secrets.toml`
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prflow").join("secrets.toml"))
    }

    /// Parse a secrets file after checking it is private to its owner
    pub fn read(path: &Path) -> Result<Self> {
        ensure_private(path)?;

        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("Invalid secrets file {}: {}", path.display(), e)))
    }
}

fn non_blank(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn resolve_token(env_token: Option<String>, secrets_path: Option<&Path>) -> Result<Option<String>> {
    if let Some(token) = non_blank(env_token) {
        debug!(source = TOKEN_ENV, "Using GitHub token");
        return Ok(Some(token));
    }

    let Some(path) = secrets_path.filter(|p| p.is_file()) else {
        debug!("No GitHub token configured, requests will be unauthenticated");
        return Ok(None);
    };

    let token = non_blank(Secrets::read(path)?.github.token);
    debug!(
        path = %path.display(),
        found = token.is_some(),
        "Looked up GitHub token in secrets file"
    );
    Ok(token)
}

#[cfg(unix)]
fn ensure_private(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode() & 0o777;
    if mode & 0o077 == 0 {
        return Ok(());
    }

    Err(Error::Config(format!(
        "{} is accessible to other users (mode {:o}); run `chmod 600 {}` or set {}",
        path.display(),
        mode,
        path.display(),
        TOKEN_ENV
    )))
}

#[cfg(not(unix))]
fn ensure_private(_path: &Path) -> Result<()> {
    Ok(())
}
