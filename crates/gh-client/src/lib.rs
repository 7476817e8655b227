//! GitHub API client for user lookups
//!
//! This crate provides a trait-based GitHub API client and the lookup flow
//! that turns a username into a profile plus repository list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_user_profile()                          │
//! │  - fetch_user_repositories()                     │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{fetch_user_data, OctocrabClient};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::build("https://api.github.com", Duration::from_secs(30))?;
//! let data = fetch_user_data(&client, "octocat").await?;
//! println!("{} has {} repositories", data.profile.login, data.repositories.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod lookup;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use error::{FetchError, Resource};
pub use lookup::fetch_user_data;
pub use octocrab_client::OctocrabClient;
pub use types::{UserData, UserProfile, UserRepository};
