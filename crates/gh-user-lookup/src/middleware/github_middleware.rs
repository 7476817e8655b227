//! GitHub Operations Middleware
//!
//! Central middleware for all GitHub interactions:
//! - User lookup (profile, then repositories) on search submit
//! - Browser integration for the profile and repository links

use crate::actions::{Action, LookupAction, ResultsAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::search_form_reducer;
use crate::state::{AppState, SearchFormState};
use crate::utils::browser::open_url;
use anyhow::Context;
use gh_client::{fetch_user_data, GitHubClient, OctocrabClient};
use gh_lookup_config::AppConfig;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn GitHubClient>,
    /// Generation handed to the most recent lookup
    generation: u64,
    /// Query as of the actions this middleware has seen
    ///
    /// The shared state lags behind the worker: typed characters are only
    /// reduced on the main thread after they passed through here. Submit
    /// must search exactly what was typed before it.
    search_form: SearchFormState,
}

impl GitHubMiddleware {
    /// Create the middleware with an octocrab client built from the config
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        // Octocrab's HTTP stack must be built inside a runtime context
        let client = {
            let _guard = runtime.enter();
            OctocrabClient::build(config.api_base_url(), config.request_timeout())?
        };
        log::info!(
            "GitHubMiddleware: client ready for {} (timeout {:?})",
            client.base_url(),
            config.request_timeout()
        );

        Ok(Self::with_client(runtime, Arc::new(client)))
    }

    pub fn with_client(runtime: Runtime, client: Arc<dyn GitHubClient>) -> Self {
        Self {
            runtime,
            client,
            generation: 0,
            search_form: SearchFormState::default(),
        }
    }

    /// Start a lookup for the current query
    ///
    /// `Started` is dispatched before the task is spawned, so it always
    /// reaches the reducer ahead of the matching `Completed`.
    fn start_lookup(&mut self, dispatcher: &Dispatcher) {
        if !self.search_form.can_search() {
            log::debug!("GitHubMiddleware: ignoring search with empty username");
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let username = self.search_form.query.clone();
        log::info!("Starting lookup #{} for '{}'", generation, username);

        dispatcher.dispatch(Action::Lookup(LookupAction::Started {
            generation,
            username: username.clone(),
        }));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = fetch_user_data(client.as_ref(), &username)
                .await
                .map_err(|e| {
                    log::warn!("Lookup #{} for '{}' failed: {:?}", generation, username, e);
                    e.to_string()
                });
            dispatcher.dispatch(Action::Lookup(LookupAction::Completed {
                generation,
                outcome,
            }));
        });
    }

    fn selected_repository_url(state: &AppState) -> Option<String> {
        state
            .lookup
            .repositories()
            .get(state.results.selected_repository)
            .map(|repo| repo.html_url.clone())
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(SearchAction::Submit) => {
                self.start_lookup(dispatcher);
                false // Consume action
            }

            Action::Search(_) => {
                self.search_form =
                    search_form_reducer::reduce(std::mem::take(&mut self.search_form), action);
                true
            }

            Action::Results(ResultsAction::OpenProfile) => {
                match state.lookup.profile() {
                    Some(profile) => {
                        self.runtime.spawn(open_url(profile.html_url.clone()));
                    }
                    None => log::warn!("No profile loaded to open in browser"),
                }
                false
            }

            Action::Results(ResultsAction::OpenSelectedRepository) => {
                match Self::selected_repository_url(state) {
                    Some(url) => {
                        self.runtime.spawn(open_url(url));
                    }
                    None => log::warn!("No repository selected for opening in browser"),
                }
                false
            }

            _ => true, // All other actions pass through
        }
    }
}
