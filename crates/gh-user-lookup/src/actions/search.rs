//! Search input actions
//!
//! Actions specific to the username input field.

/// Actions for the username input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Character typed into the field
    Char(char),
    /// Remove the last character
    Backspace,
    /// Clear the entire field
    ClearField,
    /// Replace the field content with a raw string
    SetQuery(String),
    /// Start a lookup for the current field content (Enter)
    Submit,
}
