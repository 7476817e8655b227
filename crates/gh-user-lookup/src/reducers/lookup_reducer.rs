//! Lookup Reducer
//!
//! Applies lookup lifecycle transitions. Each transition replaces the whole
//! `LookupState`, so profile, repositories, error and busy flag always
//! change together.

use crate::actions::{Action, LookupAction};
use crate::state::LookupState;

/// Reduce lookup state based on actions
pub fn reduce(state: LookupState, action: &Action) -> LookupState {
    let Action::Lookup(lookup_action) = action else {
        return state;
    };

    match lookup_action {
        LookupAction::Started {
            generation,
            username,
        } => {
            log::debug!("Lookup #{} started for '{}'", generation, username);
            LookupState::start(*generation, username.as_str())
        }
        LookupAction::Completed {
            generation,
            outcome,
        } => match state.complete(*generation, outcome) {
            Some(next) => {
                match next.error() {
                    Some(message) => log::debug!("Lookup #{} failed: {}", generation, message),
                    None => log::debug!("Lookup #{} completed", generation),
                }
                next
            }
            None => {
                log::debug!(
                    "Discarding completion of lookup #{} (current: {:?})",
                    generation,
                    state.generation()
                );
                state
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::{UserData, UserProfile, UserRepository};

    fn octocat_data() -> UserData {
        UserData {
            profile: UserProfile {
                login: "octocat".to_string(),
                name: Some("The Octocat".to_string()),
                avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
                html_url: "https://github.com/octocat".to_string(),
                bio: Some(String::new()),
                followers: 10,
                following: 2,
                public_repos: 1,
            },
            repositories: vec![UserRepository {
                name: "Hello-World".to_string(),
                html_url: "https://github.com/octocat/Hello-World".to_string(),
                description: None,
            }],
        }
    }

    fn started(generation: u64) -> Action {
        Action::Lookup(LookupAction::Started {
            generation,
            username: "octocat".to_string(),
        })
    }

    fn completed(generation: u64, outcome: Result<UserData, String>) -> Action {
        Action::Lookup(LookupAction::Completed {
            generation,
            outcome,
        })
    }

    #[test]
    fn test_started_clears_previous_success() {
        let state = LookupState::Success {
            generation: 1,
            data: octocat_data(),
        };

        let state = reduce(state, &started(2));

        assert!(state.is_loading());
        assert!(state.profile().is_none());
        assert!(state.repositories().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_started_clears_previous_error() {
        let state = LookupState::Failed {
            generation: 1,
            message: "User not found".to_string(),
        };

        let state = reduce(state, &started(2));

        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_busy_only_between_start_and_completion() {
        let state = LookupState::Idle;
        assert!(!state.is_loading());

        let state = reduce(state, &started(1));
        assert!(state.is_loading());

        let state = reduce(state, &completed(1, Ok(octocat_data())));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_success_copies_fields_verbatim() {
        let state = reduce(LookupState::Idle, &started(1));
        let state = reduce(state, &completed(1, Ok(octocat_data())));

        assert_eq!(state.profile(), Some(&octocat_data().profile));
        assert_eq!(state.repositories(), octocat_data().repositories.as_slice());
    }

    #[test]
    fn test_failure_keeps_nothing_from_attempt() {
        let state = reduce(LookupState::Idle, &started(1));
        let state = reduce(state, &completed(1, Err("User not found".to_string())));

        assert_eq!(state.error(), Some("User not found"));
        assert!(state.profile().is_none());
        assert!(state.repositories().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        // Two overlapping searches: the first one finishes last
        let state = reduce(LookupState::Idle, &started(1));
        let state = reduce(state, &started(2));
        let state = reduce(state, &completed(2, Err("User not found".to_string())));
        let state = reduce(state, &completed(1, Ok(octocat_data())));

        assert_eq!(state.error(), Some("User not found"));
        assert!(state.profile().is_none());
    }

    #[test]
    fn test_stale_completion_does_not_end_loading() {
        let state = reduce(LookupState::Idle, &started(1));
        let state = reduce(state, &started(2));
        let state = reduce(state, &completed(1, Ok(octocat_data())));

        assert!(state.is_loading());
        assert_eq!(state.generation(), Some(2));
    }
}
