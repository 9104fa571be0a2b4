//! Open pull request listing

use prflow_core::ChangeRequest;
use serde::Deserialize;
use tracing::info;

use crate::{paginate::FailurePolicy, GitHubClient, Result};

/// The subset of GitHub's pull request payload prflow reads
#[derive(Debug, Deserialize)]
struct PullRecord {
    number: u64,
    #[serde(default)]
    title: String,
    head: RefRecord,
    base: RefRecord,
}

#[derive(Debug, Deserialize)]
struct RefRecord {
    #[serde(rename = "ref")]
    ref_field: String,
}

impl From<PullRecord> for ChangeRequest {
    fn from(pr: PullRecord) -> Self {
        ChangeRequest {
            id: pr.number,
            title: pr.title,
            source_branch: pr.head.ref_field,
            target_branch: pr.base.ref_field,
        }
    }
}

impl GitHubClient {
    /// List every open pull request, in the order GitHub returns them
    ///
    /// Any failure is returned as an error.
    pub async fn list_open_change_requests(&self) -> Result<Vec<ChangeRequest>> {
        let records: Vec<PullRecord> = self
            .fetch_paged("pulls", &[("state", "open")], FailurePolicy::Fatal)
            .await?;

        let prs: Vec<ChangeRequest> = records.into_iter().map(ChangeRequest::from).collect();
        info!(count = prs.len(), "Fetched open pull requests");

        Ok(prs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use mockito::{Matcher, Server};
    use prflow_core::RepoRef;

    const PAGE_ONE: &str = r#"[
        {
            "number": 1,
            "title": "Add X",
            "state": "open",
            "head": {"ref": "feature/a", "sha": "abc"},
            "base": {"ref": "develop", "sha": "def"}
        },
        {
            "number": 2,
            "title": "Release",
            "state": "open",
            "head": {"ref": "develop", "sha": "def"},
            "base": {"ref": "main", "sha": "123"}
        }
    ]"#;

    #[test]
    fn test_record_conversion() {
        let records: Vec<PullRecord> = serde_json::from_str(PAGE_ONE).unwrap();
        let prs: Vec<ChangeRequest> = records.into_iter().map(Into::into).collect();
        assert_eq!(prs[0], ChangeRequest::new(1, "Add X", "feature/a", "develop"));
        assert_eq!(prs[1], ChangeRequest::new(2, "Release", "develop", "main"));
    }

    #[tokio::test]
    async fn test_list_open_change_requests() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("GET", "/repos/octo/demo/pulls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "open".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(PAGE_ONE)
            .create_async()
            .await;
        let done = server
            .mock("GET", "/repos/octo/demo/pulls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "open".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client =
            GitHubClient::with_api_url(&server.url(), &RepoRef::new("octo", "demo"), None).unwrap();
        let prs = client.list_open_change_requests().await.unwrap();

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[1].target_branch, "main");
        first.assert_async().await;
        done.assert_async().await;
    }

    #[tokio::test]
    async fn test_private_repo_without_token_is_fatal_with_hint() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/octo/secret/pulls")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client =
            GitHubClient::with_api_url(&server.url(), &RepoRef::new("octo", "secret"), None)
                .unwrap();
        let err = client.list_open_change_requests().await.unwrap_err();

        assert!(matches!(err, Error::NotFoundWithoutToken));
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }
}
