//! Navigation actions - shared across views
//!
//! Generic navigation actions that views translate into their
//! screen-specific actions.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Navigate to top (g, Home)
    ToTop,
    /// Navigate to bottom (G, End)
    ToBottom,
}
