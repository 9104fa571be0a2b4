//! Page-number pagination over GitHub list endpoints

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{Error, GitHubClient, Result};

/// Items requested per page
pub(crate) const PER_PAGE: u32 = 100;

/// What a failed fetch turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailurePolicy {
    /// Return the error to the caller
    Fatal,
    /// Log a warning and return an empty list
    WarnAndEmpty,
}

impl GitHubClient {
    /// Collect every page of `resource` until GitHub returns an empty array
    ///
    /// Pages are requested one at a time starting from 1. Any non-success
    /// status stops the loop; `policy` decides whether that surfaces as an
    /// error or as an empty result.
    pub(crate) async fn fetch_paged<T>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
        policy: FailurePolicy,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.fetch_all_pages(resource, query).await {
            Ok(items) => Ok(items),
            Err(err) if policy == FailurePolicy::WarnAndEmpty => {
                warn!(
                    owner = %self.owner(),
                    repo = %self.repo(),
                    resource,
                    error = %err,
                    "Could not fetch {}, continuing without them",
                    resource
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch_all_pages<T>(&self, resource: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(resource)?;
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!(resource, page, "Fetching page");

            let response = self
                .get(url.clone())
                .query(query)
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                debug!(resource, page, status = status.as_u16(), "Page request failed");
                return Err(Error::from_status(status, self.is_authenticated()));
            }

            let batch: Vec<T> = response.json().await.map_err(|e| {
                Error::Parse(format!("Failed to parse {} page {}: {}", resource, page, e))
            })?;

            if batch.is_empty() {
                break;
            }

            items.extend(batch);
            page += 1;
        }

        debug!(resource, count = items.len(), pages = page - 1, "Fetched all pages");
        Ok(items)
    }
}
