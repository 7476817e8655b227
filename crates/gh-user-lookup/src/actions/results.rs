//! Result panel actions
//!
//! Focus handling, repository cursor movement and outbound links.

/// Actions for the profile/repository result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    /// Switch focus between the input field and the repository list (Tab)
    ToggleFocus,
    /// Return focus to the input field
    FocusInput,
    NextRepository,
    PreviousRepository,
    FirstRepository,
    LastRepository,
    /// Open the profile page in the browser
    OpenProfile,
    /// Open the repository under the cursor in the browser
    OpenSelectedRepository,
}
