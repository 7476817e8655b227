//! View model for the result panel
//!
//! Maps a `LookupState` into what the panel shows: nothing, a loading
//! placeholder, an error line, or the profile card with its repositories.

use crate::state::LookupState;
use gh_client::{UserProfile, UserRepository};

pub const NO_NAME: &str = "No Name Provided";
pub const NO_BIO: &str = "No Bio Available";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_REPOSITORIES: &str = "No repositories available";
pub const PROFILE_LINK_LABEL: &str = "click here to view profile";

/// What the result panel displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsViewModel {
    Idle,
    Loading { username: String },
    Failed { message: String },
    Success(ProfileViewModel),
}

impl ResultsViewModel {
    pub fn new(lookup: &LookupState) -> Self {
        match lookup {
            LookupState::Idle => ResultsViewModel::Idle,
            LookupState::Loading { username, .. } => ResultsViewModel::Loading {
                username: username.clone(),
            },
            LookupState::Failed { message, .. } => ResultsViewModel::Failed {
                message: message.clone(),
            },
            LookupState::Success { data, .. } => ResultsViewModel::Success(
                ProfileViewModel::new(&data.profile, &data.repositories),
            ),
        }
    }
}

/// Display data of the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewModel {
    pub avatar_url: String,
    pub display_name: String,
    /// "@login"
    pub handle: String,
    pub bio: String,
    /// (value, label) pairs: followers, following, repos
    pub counters: [(String, &'static str); 3],
    pub profile_url: String,
    pub repositories: RepositorySection,
}

impl ProfileViewModel {
    pub fn new(profile: &UserProfile, repositories: &[UserRepository]) -> Self {
        Self {
            avatar_url: profile.avatar_url.clone(),
            display_name: non_empty_or(profile.name.as_deref(), NO_NAME),
            handle: format!("@{}", profile.login),
            bio: non_empty_or(profile.bio.as_deref(), NO_BIO),
            counters: [
                (profile.followers.to_string(), "Followers"),
                (profile.following.to_string(), "Following"),
                (profile.public_repos.to_string(), "Repos"),
            ],
            profile_url: profile.html_url.clone(),
            repositories: RepositorySection::new(repositories),
        }
    }
}

/// The "Repositories" section below the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySection {
    /// The user has no public repositories
    Empty { message: &'static str },
    /// One entry per repository, in API order
    Entries(Vec<RepositoryEntry>),
}

impl RepositorySection {
    fn new(repositories: &[UserRepository]) -> Self {
        if repositories.is_empty() {
            return RepositorySection::Empty {
                message: NO_REPOSITORIES,
            };
        }

        RepositorySection::Entries(
            repositories
                .iter()
                .map(|repo| RepositoryEntry {
                    name: repo.name.clone(),
                    url: repo.html_url.clone(),
                    description: non_empty_or(repo.description.as_deref(), NO_DESCRIPTION),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Absent and empty values both fall back
fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
