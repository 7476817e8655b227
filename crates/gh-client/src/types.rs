//! GitHub API data transfer objects
//!
//! These types mirror the subset of the `/users/{username}` and
//! `/users/{username}/repos` payloads the lookup screen displays.
//! Fields not listed here are ignored when decoding.

use serde::{Deserialize, Serialize};

/// Public account attributes of a GitHub user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique handle (e.g., "octocat")
    pub login: String,

    /// Display name, absent when the user never set one
    #[serde(default)]
    pub name: Option<String>,

    /// Avatar image URL
    pub avatar_url: String,

    /// Profile page URL for opening in browser
    pub html_url: String,

    /// Free-form biography
    #[serde(default)]
    pub bio: Option<String>,

    pub followers: u64,

    pub following: u64,

    pub public_repos: u64,
}

/// One publicly listed repository owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepository {
    /// Repository name, unique within one user's list
    pub name: String,

    /// Repository URL for opening in browser
    pub html_url: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Result of one complete lookup: the profile and its repositories
/// in the order returned by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub profile: UserProfile,
    pub repositories: Vec<UserRepository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "company": "@github",
            "bio": null,
            "followers": 10,
            "following": 2,
            "public_repos": 1
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.bio, None);
        assert_eq!(profile.public_repos, 1);
    }

    #[test]
    fn test_profile_missing_optional_fields() {
        let json = r#"{
            "login": "ghost",
            "avatar_url": "https://example.com/a.png",
            "html_url": "https://github.com/ghost",
            "followers": 0,
            "following": 0,
            "public_repos": 0
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, None);
        assert_eq!(profile.bio, None);
    }

    #[test]
    fn test_profile_rejects_negative_counters() {
        let json = r#"{
            "login": "ghost",
            "avatar_url": "https://example.com/a.png",
            "html_url": "https://github.com/ghost",
            "followers": -1,
            "following": 0,
            "public_repos": 0
        }"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn test_repository_list_keeps_order() {
        let json = r#"[
            {"name": "zeta", "html_url": "https://github.com/o/zeta", "description": null},
            {"name": "alpha", "html_url": "https://github.com/o/alpha", "description": "first"}
        ]"#;
        let repos: Vec<UserRepository> = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(repos[1].description.as_deref(), Some("first"));
    }
}
