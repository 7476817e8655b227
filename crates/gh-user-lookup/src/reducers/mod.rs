pub mod app_reducer;
pub mod lookup_reducer;
pub mod results_reducer;
pub mod search_form_reducer;
