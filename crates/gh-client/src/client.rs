//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait used by the lookup flow.
//! Implementations can be direct (hitting the API) or in-memory fakes
//! for tests.

use crate::error::FetchError;
use crate::types::{UserProfile, UserRepository};
use async_trait::async_trait;

/// GitHub API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn show(client: &dyn GitHubClient) -> Result<(), gh_client::FetchError> {
///     let profile = client.fetch_user_profile("octocat").await?;
///     println!("{}", profile.login);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public profile of a user (`GET /users/{username}`)
    ///
    /// The username is used verbatim apart from percent-encoding it as a
    /// path segment.
    ///
    /// # Errors
    ///
    /// Any non-2xx status yields [`FetchError::UserNotFound`].
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, FetchError>;

    /// Fetch the first page of a user's public repositories
    /// (`GET /users/{username}/repos`)
    ///
    /// The order returned by the API is preserved.
    ///
    /// # Errors
    ///
    /// A non-2xx status yields [`FetchError::RepositoriesUnavailable`]; a body
    /// that is not an array of repositories yields [`FetchError::Decode`].
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<UserRepository>, FetchError>;
}
