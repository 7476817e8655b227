//! View model for the username input and search action

use crate::state::{LookupState, SearchFormState};

pub const INPUT_PLACEHOLDER: &str = "Enter Your Github Username...";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// Display data for the input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarViewModel {
    /// Text to show in the field (the query, or the placeholder)
    pub text: String,
    pub is_placeholder: bool,
    /// "Search", or "Searching..." while a lookup is in flight
    pub action_label: &'static str,
    /// Whether Enter triggers a lookup
    pub action_enabled: bool,
}

impl SearchBarViewModel {
    pub fn new(form: &SearchFormState, lookup: &LookupState) -> Self {
        let (text, is_placeholder) = if form.query.is_empty() {
            (INPUT_PLACEHOLDER.to_string(), true)
        } else {
            (form.query.clone(), false)
        };

        Self {
            text,
            is_placeholder,
            action_label: if lookup.is_loading() {
                SEARCHING_LABEL
            } else {
                SEARCH_LABEL
            },
            action_enabled: form.can_search(),
        }
    }
}
