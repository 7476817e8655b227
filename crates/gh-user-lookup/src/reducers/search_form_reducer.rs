//! Search Form Reducer
//!
//! Handles edits of the username input field.

use crate::actions::{Action, SearchAction};
use crate::state::SearchFormState;

/// Reduce search form state based on actions
pub fn reduce(mut state: SearchFormState, action: &Action) -> SearchFormState {
    if let Action::Search(search_action) = action {
        match search_action {
            SearchAction::Char(c) => state.push_char(*c),
            SearchAction::Backspace => state.backspace(),
            SearchAction::ClearField => state.clear(),
            SearchAction::SetQuery(text) => state.set_query(text.as_str()),
            // Submit is handled by the GitHub middleware and never changes the text
            SearchAction::Submit => {}
        }
    }

    state
}
