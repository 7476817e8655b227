//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod lookup;
mod results;
mod search_form;

pub use app::AppState;
pub use lookup::LookupState;
pub use results::{Focus, ResultsState};
pub use search_form::SearchFormState;
