//! Lookup State
//!
//! The request state of the current search as one tagged value. Exactly one
//! variant drives the result panel at any time, so a loading indicator can
//! never be shown next to an error or a stale profile.

use gh_client::{UserData, UserProfile, UserRepository};

/// Request state of the user lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    /// No search has been started yet
    #[default]
    Idle,
    /// A search is in flight
    Loading { generation: u64, username: String },
    /// The last search returned a profile and its repositories
    Success { generation: u64, data: UserData },
    /// The last search failed with the given message
    Failed { generation: u64, message: String },
}

impl LookupState {
    /// Enter `Loading` for a new search, dropping any previous result
    pub fn start(generation: u64, username: impl Into<String>) -> Self {
        LookupState::Loading {
            generation,
            username: username.into(),
        }
    }

    /// Apply a completed lookup
    ///
    /// Returns `None` when the completion does not belong to the search in
    /// flight (stale generation, or nothing in flight).
    pub fn complete(&self, generation: u64, outcome: &Result<UserData, String>) -> Option<Self> {
        match self {
            LookupState::Loading {
                generation: current,
                ..
            } if *current == generation => Some(match outcome {
                Ok(data) => LookupState::Success {
                    generation,
                    data: data.clone(),
                },
                Err(message) => LookupState::Failed {
                    generation,
                    message: message.clone(),
                },
            }),
            _ => None,
        }
    }

    /// The busy flag: true strictly while a search is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }

    /// Generation of the current or last search
    pub fn generation(&self) -> Option<u64> {
        match self {
            LookupState::Idle => None,
            LookupState::Loading { generation, .. }
            | LookupState::Success { generation, .. }
            | LookupState::Failed { generation, .. } => Some(*generation),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            LookupState::Success { data, .. } => Some(&data.profile),
            _ => None,
        }
    }

    /// Repositories of the last successful search; empty otherwise
    pub fn repositories(&self) -> &[UserRepository] {
        match self {
            LookupState::Success { data, .. } => &data.repositories,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LookupState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
