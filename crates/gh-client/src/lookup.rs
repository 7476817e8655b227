//! User lookup flow
//!
//! Sequences the two requests behind one search: the profile first, then
//! the repository list. A failure in either request fails the whole lookup,
//! so callers never see a profile paired with a missing repository list.

use crate::client::GitHubClient;
use crate::error::FetchError;
use crate::types::UserData;
use log::debug;

/// Look up a user's profile and repositories
///
/// The repository request is only issued after the profile request
/// succeeded.
pub async fn fetch_user_data(
    client: &dyn GitHubClient,
    username: &str,
) -> Result<UserData, FetchError> {
    debug!("Looking up user '{}'", username);

    let profile = client.fetch_user_profile(username).await?;
    let repositories = client.fetch_user_repositories(username).await?;

    debug!(
        "Lookup of '{}' finished with {} repositories",
        profile.login,
        repositories.len()
    );
    Ok(UserData {
        profile,
        repositories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;
    use crate::types::{UserProfile, UserRepository};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory client recording which endpoints were called
    struct FakeClient {
        profile: fn() -> Result<UserProfile, FetchError>,
        repositories: fn() -> Result<Vec<UserRepository>, FetchError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeClient {
        fn new(
            profile: fn() -> Result<UserProfile, FetchError>,
            repositories: fn() -> Result<Vec<UserRepository>, FetchError>,
        ) -> Self {
            Self {
                profile,
                repositories,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GitHubClient for FakeClient {
        async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, FetchError> {
            self.calls.lock().unwrap().push(format!("profile:{username}"));
            (self.profile)()
        }

        async fn fetch_user_repositories(
            &self,
            username: &str,
        ) -> Result<Vec<UserRepository>, FetchError> {
            self.calls.lock().unwrap().push(format!("repos:{username}"));
            (self.repositories)()
        }
    }

    fn octocat() -> Result<UserProfile, FetchError> {
        Ok(UserProfile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            bio: Some(String::new()),
            followers: 10,
            following: 2,
            public_repos: 1,
        })
    }

    fn hello_world() -> Result<Vec<UserRepository>, FetchError> {
        Ok(vec![UserRepository {
            name: "Hello-World".to_string(),
            html_url: "https://github.com/octocat/Hello-World".to_string(),
            description: None,
        }])
    }

    fn not_found() -> Result<UserProfile, FetchError> {
        Err(FetchError::UserNotFound { status: 404 })
    }

    fn rate_limited() -> Result<Vec<UserRepository>, FetchError> {
        Err(FetchError::RepositoriesUnavailable { status: 403 })
    }

    fn malformed() -> Result<Vec<UserRepository>, FetchError> {
        let source = serde_json::from_str::<Vec<UserRepository>>(r#"{"message":"x"}"#)
            .unwrap_err();
        Err(FetchError::Decode {
            resource: Resource::Repositories,
            source,
        })
    }

    #[tokio::test]
    async fn test_lookup_fetches_profile_then_repositories() {
        let client = FakeClient::new(octocat, hello_world);

        let data = fetch_user_data(&client, "octocat").await.unwrap();

        assert_eq!(data.profile.login, "octocat");
        assert_eq!(data.repositories.len(), 1);
        assert_eq!(client.calls(), vec!["profile:octocat", "repos:octocat"]);
    }

    #[tokio::test]
    async fn test_profile_failure_skips_repository_request() {
        let client = FakeClient::new(not_found, hello_world);

        let err = fetch_user_data(&client, "this-user-does-not-exist-xyz")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User not found");
        assert_eq!(client.calls(), vec!["profile:this-user-does-not-exist-xyz"]);
    }

    #[tokio::test]
    async fn test_repository_failure_fails_lookup() {
        let client = FakeClient::new(octocat, rate_limited);

        let err = fetch_user_data(&client, "octocat").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load repositories (HTTP 403)");
    }

    #[tokio::test]
    async fn test_malformed_repository_body_fails_lookup() {
        let client = FakeClient::new(octocat, malformed);

        let err = fetch_user_data(&client, "octocat").await.unwrap_err();

        assert!(matches!(
            err,
            FetchError::Decode {
                resource: Resource::Repositories,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_username_is_passed_verbatim() {
        let client = FakeClient::new(octocat, hello_world);

        fetch_user_data(&client, " Octo Cat ").await.unwrap();

        assert_eq!(client.calls(), vec!["profile: Octo Cat ", "repos: Octo Cat "]);
    }
}
