//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread processes all middleware (API calls, browser launches)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain,
//! enabling the `TextInput(Confirm)` -> `Search(Submit)` -> `Lookup(Started)` flow.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

const TICK_RATE: Duration = Duration::from_millis(150);

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);
    let mut last_tick = Instant::now();

    loop {
        match action_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(action) => {
                if matches!(action, Action::Global(GlobalAction::Quit)) {
                    log::info!("Background worker received shutdown signal");
                    if result_tx.send(action).is_err() {
                        log::error!("Failed to send quit action to main thread");
                    }
                    break;
                }

                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                let should_forward = middleware
                    .iter_mut()
                    .all(|mw| mw.handle(&action, &current_state, &dispatcher));

                if should_forward && result_tx.send(action).is_err() {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        // Ticks drive the loading spinner, so only emit them while a lookup runs
        if last_tick.elapsed() >= TICK_RATE {
            let loading = state.read().map(|s| s.lookup.is_loading()).unwrap_or(false);
            if loading && result_tx.send(Action::Global(GlobalAction::Tick)).is_err() {
                log::error!("Result channel disconnected during tick");
                break;
            }
            last_tick = Instant::now();
        }
    }

    log::info!("Background worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SearchAction;
    use crate::dispatcher::Dispatcher;
    use std::sync::mpsc::channel;

    /// Consumes `Search(Submit)` and counts every action it sees
    struct ConsumeSubmit;

    impl Middleware for ConsumeSubmit {
        fn handle(&mut self, action: &Action, _state: &AppState, _d: &Dispatcher) -> bool {
            !matches!(action, Action::Search(SearchAction::Submit))
        }
    }

    #[test]
    fn test_forwards_unconsumed_actions_and_stops_on_quit() {
        let (action_tx, action_rx) = channel();
        let (result_tx, result_rx) = channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(ConsumeSubmit)],
        );

        action_tx
            .send(Action::Search(SearchAction::Char('a')))
            .unwrap();
        action_tx.send(Action::Search(SearchAction::Submit)).unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        handle.join().unwrap();

        let received: Vec<Action> = result_rx.try_iter().collect();
        assert!(matches!(
            received.as_slice(),
            [
                Action::Search(SearchAction::Char('a')),
                Action::Global(GlobalAction::Quit)
            ]
        ));
    }

    /// Answers every lookup with an empty profile
    struct EmptyProfileClient;

    #[async_trait::async_trait]
    impl gh_client::GitHubClient for EmptyProfileClient {
        async fn fetch_user_profile(
            &self,
            username: &str,
        ) -> Result<gh_client::UserProfile, gh_client::FetchError> {
            Ok(gh_client::UserProfile {
                login: username.to_string(),
                name: None,
                avatar_url: String::new(),
                html_url: format!("https://github.com/{username}"),
                bio: None,
                followers: 0,
                following: 0,
                public_repos: 0,
            })
        }

        async fn fetch_user_repositories(
            &self,
            _username: &str,
        ) -> Result<Vec<gh_client::UserRepository>, gh_client::FetchError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_fast_typing_then_enter_searches_full_text() {
        use crate::actions::LookupAction;
        use crate::middleware::{
            github_middleware::GitHubMiddleware, keyboard_middleware::KeyboardMiddleware,
            navigation_middleware::NavigationMiddleware,
            text_input_middleware::TextInputMiddleware,
        };
        use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let (action_tx, action_rx) = channel();
        let (result_tx, result_rx) = channel();
        // Never reduced: the worker only ever sees the initial snapshot
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let github = GitHubMiddleware::with_client(
            tokio::runtime::Runtime::new().unwrap(),
            Arc::new(EmptyProfileClient),
        );
        let middleware: Vec<Box<dyn Middleware>> = vec![
            Box::new(KeyboardMiddleware::new()),
            Box::new(NavigationMiddleware::new()),
            Box::new(TextInputMiddleware::new()),
            Box::new(github),
        ];
        let handle =
            spawn_background_worker(action_rx, action_tx.clone(), result_tx, state, middleware);

        let keys = "octocat"
            .chars()
            .map(KeyCode::Char)
            .chain(std::iter::once(KeyCode::Enter));
        for code in keys {
            action_tx
                .send(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
                    code,
                    KeyModifiers::NONE,
                ))))
                .unwrap();
        }

        let mut started = None;
        while started.is_none() {
            match result_rx.recv_timeout(Duration::from_secs(5)) {
                Ok(Action::Lookup(LookupAction::Started { username, .. })) => {
                    started = Some(username)
                }
                Ok(_) => {}
                Err(e) => panic!("no lookup started: {e}"),
            }
        }
        assert_eq!(started.as_deref(), Some("octocat"));

        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        handle.join().unwrap();
    }
}
