//! GitHub REST client

use prflow_core::RepoRef;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    RequestBuilder,
};
use tracing::info;
use url::Url;

use crate::{Error, Result};

const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = "prflow";

/// GitHub API client bound to one repository
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: Url,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client against `api_url` (api.github.com, GitHub Enterprise, tests)
    ///
    /// Without a token the client sends no `Authorization` header; public
    /// repositories still work, private ones answer 404.
    pub fn with_api_url(api_url: &str, repo: &RepoRef, token: Option<String>) -> Result<Self> {
        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Url(format!("{} cannot be used as a base URL", api_url)));
        }

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let token = token.filter(|t| !t.is_empty());

        info!(
            owner = %repo.owner,
            repo = %repo.name,
            api_url = %api_url,
            authenticated = token.is_some(),
            "Created GitHub client"
        );

        Ok(Self {
            http,
            api_url,
            owner: repo.owner.clone(),
            repo: repo.name.clone(),
            token,
        })
    }

    /// Get the repository owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `{api_url}/repos/{owner}/{repo}/{resource}`
    pub(crate) fn endpoint(&self, resource: &str) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Url(format!("{} cannot be used as a base URL", self.api_url)))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str(), resource]);
        Ok(url)
    }

    /// GET request carrying the versioned media type and, if present, the token
    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .get(url)
            .header(ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION);

        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url.as_str())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prflow_core::config::DEFAULT_API_URL;

    fn repo() -> RepoRef {
        RepoRef::new("octo", "demo")
    }

    #[test]
    fn test_endpoint_on_public_api() {
        let client = GitHubClient::with_api_url(DEFAULT_API_URL, &repo(), None).unwrap();
        assert_eq!(
            client.endpoint("pulls").unwrap().as_str(),
            "https://api.github.com/repos/octo/demo/pulls"
        );
    }

    #[test]
    fn test_endpoint_keeps_enterprise_prefix() {
        let client =
            GitHubClient::with_api_url("https://ghe.example.com/api/v3/", &repo(), None).unwrap();
        assert_eq!(
            client.endpoint("branches").unwrap().as_str(),
            "https://ghe.example.com/api/v3/repos/octo/demo/branches"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        let err = GitHubClient::with_api_url("not a url", &repo(), None).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let client =
            GitHubClient::with_api_url(DEFAULT_API_URL, &repo(), Some(String::new())).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_debug_hides_token() {
        let token = Some("ghp_secret".to_string());
        let client = GitHubClient::with_api_url(DEFAULT_API_URL, &repo(), token).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("authenticated: true"));
    }
}
