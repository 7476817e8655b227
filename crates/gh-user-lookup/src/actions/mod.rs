//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular reducer

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod lookup;
pub mod results;
pub mod search;

pub use global::GlobalAction;
pub use lookup::LookupAction;
pub use navigation::NavigationAction;
pub use results::ResultsAction;
pub use search::SearchAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Username input field actions
    Search(SearchAction),
    /// Lookup lifecycle (started / completed)
    Lookup(LookupAction),
    /// Result panel actions (focus, repository cursor, links)
    Results(ResultsAction),
}
