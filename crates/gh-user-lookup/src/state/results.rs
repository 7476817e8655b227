//! Result Panel State

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The username input field
    #[default]
    Input,
    /// The repository list of a successful lookup
    Repositories,
}

/// Focus and repository cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub focus: Focus,
    pub selected_repository: usize,
}

impl ResultsState {
    /// Reset cursor and focus, e.g. when a new search starts
    pub fn reset(&mut self) {
        self.focus = Focus::Input;
        self.selected_repository = 0;
    }
}
