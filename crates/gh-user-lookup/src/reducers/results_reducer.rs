//! Results Reducer
//!
//! Focus switching and repository cursor movement.

use crate::actions::{Action, LookupAction, ResultsAction};
use crate::state::{Focus, ResultsState};

/// Reduce result panel state
///
/// `repository_count` is the length of the list currently displayed.
pub fn reduce(mut state: ResultsState, action: &Action, repository_count: usize) -> ResultsState {
    match action {
        Action::Lookup(LookupAction::Started { .. }) => state.reset(),
        Action::Results(results_action) => match results_action {
            ResultsAction::ToggleFocus => {
                state.focus = match state.focus {
                    Focus::Input if repository_count > 0 => Focus::Repositories,
                    Focus::Input => Focus::Input,
                    Focus::Repositories => Focus::Input,
                };
            }
            ResultsAction::FocusInput => state.focus = Focus::Input,
            ResultsAction::NextRepository => {
                if repository_count > 0 {
                    state.selected_repository =
                        (state.selected_repository + 1).min(repository_count - 1);
                }
            }
            ResultsAction::PreviousRepository => {
                state.selected_repository = state.selected_repository.saturating_sub(1);
            }
            ResultsAction::FirstRepository => state.selected_repository = 0,
            ResultsAction::LastRepository => {
                state.selected_repository = repository_count.saturating_sub(1);
            }
            // Opening links is a side effect handled by the GitHub middleware
            ResultsAction::OpenProfile | ResultsAction::OpenSelectedRepository => {}
        },
        _ => {}
    }

    state
}
