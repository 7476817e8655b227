//! View Models
//!
//! View models translate state into display-ready text, keeping fallback
//! texts and labels out of the render code.

pub mod results_view_model;
pub mod search_bar_view_model;

pub use results_view_model::{
    ProfileViewModel, RepositoryEntry, RepositorySection, ResultsViewModel,
};
pub use search_bar_view_model::SearchBarViewModel;
