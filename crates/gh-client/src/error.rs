//! Lookup error taxonomy
//!
//! Every variant renders to the single human-readable message shown in the
//! lookup screen's error slot.

use std::fmt;
use std::time::Duration;

/// Which of the two lookup requests a fault belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Repositories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Profile => write!(f, "profile"),
            Resource::Repositories => write!(f, "repositories"),
        }
    }
}

/// Errors produced while looking up a user
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The profile endpoint answered with a non-2xx status.
    ///
    /// The message is the same for every status (404, 403, 500, ...).
    #[error("User not found")]
    UserNotFound { status: u16 },

    /// The repository endpoint answered with a non-2xx status
    #[error("Failed to load repositories (HTTP {status})")]
    RepositoriesUnavailable { status: u16 },

    /// The response body did not match the expected schema
    #[error("Unexpected {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {}s while loading {resource}", .after.as_secs())]
    Timeout { resource: Resource, after: Duration },

    /// Network or client fault, surfaced verbatim
    #[error(transparent)]
    Transport(#[from] octocrab::Error),
}
