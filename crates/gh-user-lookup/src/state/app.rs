//! Application State

use crate::theme::Theme;
use crate::views::{SearchView, View};
use gh_lookup_config::AppConfig;

use super::{LookupState, ResultsState, SearchFormState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the search screen, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub search_form: SearchFormState,
    pub lookup: LookupState,
    pub results: ResultsState,
    /// Animation frame counter, advanced while a lookup is in flight
    pub tick: usize,
    pub theme: Theme,
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("search_form", &self.search_form)
            .field("lookup", &self.lookup)
            .field("results", &self.results)
            .field("tick", &self.tick)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            search_form: self.search_form.clone(),
            lookup: self.lookup.clone(),
            results: self.results.clone(),
            tick: self.tick,
            theme: self.theme.clone(),
            app_config: self.app_config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SearchView::new())],
            search_form: SearchFormState::default(),
            lookup: LookupState::default(),
            results: ResultsState::default(),
            tick: 0,
            theme: Theme::default(),
            app_config: AppConfig::default(),
        }
    }
}
