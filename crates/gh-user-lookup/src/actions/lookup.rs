//! Lookup lifecycle actions
//!
//! Dispatched by the GitHub middleware. Every lookup carries the generation
//! it was started with, so the reducer can drop completions of lookups that
//! were superseded by a newer search.

use gh_client::UserData;

/// Lookup lifecycle actions
#[derive(Debug, Clone)]
pub enum LookupAction {
    /// A lookup was started; previous results must be discarded
    Started { generation: u64, username: String },
    /// A lookup finished, either with data or with the message to display
    Completed {
        generation: u64,
        outcome: Result<UserData, String>,
    },
}
