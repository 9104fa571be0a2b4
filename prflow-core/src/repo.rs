//! Repository identifier parsing

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A GitHub repository in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    /// Parse `owner/name`; exactly one `/` with both sides non-empty
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::InvalidRepo(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
