//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Requests go out unauthenticated and without retries; every request is
//! bounded by the configured timeout.

use crate::client::GitHubClient;
use crate::error::{FetchError, Resource};
use crate::types::{UserProfile, UserRepository};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    /// API base address without trailing slash (e.g., "https://api.github.com")
    base_url: String,
    timeout: Duration,
}

/// Raw outcome of a GET: the status code and, for 2xx, the body
struct RawResponse {
    status: u16,
    body: Option<String>,
}

impl OctocrabClient {
    /// Create a client for the given API base address
    pub fn build(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let octocrab = Octocrab::builder()
            .base_uri(base_url.as_str())
            .with_context(|| format!("Invalid API base address '{}'", base_url))?
            .add_retry_config(RetryConfig::None)
            .build()
            .context("Failed to build Octocrab client")?;

        Ok(Self {
            octocrab: Arc::new(octocrab),
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    fn user_repositories_url(&self, username: &str) -> String {
        format!("{}/repos", self.user_url(username))
    }

    /// GET a URL within the timeout
    async fn get(&self, url: String, resource: Resource) -> Result<RawResponse, FetchError> {
        debug!("GET {} ({})", url, resource);
        self.with_timeout(resource, self.fetch_raw(url)).await
    }

    /// GET a URL, reading the body only for successful responses
    async fn fetch_raw(&self, url: String) -> Result<RawResponse, FetchError> {
        let response = self.octocrab._get(url).await?;
        let status = response.status();

        if !status.is_success() {
            return Ok(RawResponse {
                status: status.as_u16(),
                body: None,
            });
        }

        let body = self.octocrab.body_to_string(response).await?;
        Ok(RawResponse {
            status: status.as_u16(),
            body: Some(body),
        })
    }

    async fn with_timeout<T>(
        &self,
        resource: Resource,
        request: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, FetchError> {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout {
                resource,
                after: self.timeout,
            })?
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, FetchError> {
        let response = self.get(self.user_url(username), Resource::Profile).await?;

        let Some(body) = response.body else {
            debug!(
                "Profile lookup for '{}' answered HTTP {}",
                username, response.status
            );
            return Err(FetchError::UserNotFound {
                status: response.status,
            });
        };

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            resource: Resource::Profile,
            source,
        })
    }

    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<UserRepository>, FetchError> {
        let response = self
            .get(self.user_repositories_url(username), Resource::Repositories)
            .await?;

        let Some(body) = response.body else {
            return Err(FetchError::RepositoriesUnavailable {
                status: response.status,
            });
        };

        let repositories: Vec<UserRepository> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                resource: Resource::Repositories,
                source,
            })?;

        debug!(
            "Fetched {} repositories for '{}'",
            repositories.len(),
            username
        );
        Ok(repositories)
    }
}
