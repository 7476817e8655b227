use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction, SearchAction};
use background::{spawn_background_worker, SharedState};
use gh_lookup_config::AppConfig;
use middleware::{
    github_middleware::GitHubMiddleware, keyboard_middleware::KeyboardMiddleware,
    navigation_middleware::NavigationMiddleware, text_input_middleware::TextInputMiddleware,
    Middleware,
};
use reducers::app_reducer;
use state::AppState;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-user-lookup, logging to {}", log_file.display());

    let app_config = AppConfig::load();
    log::debug!("Loaded configuration: {:?}", app_config);

    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(GitHubMiddleware::new(&app_config)?),
    ];

    let (action_tx, action_rx) = channel::<Action>();
    let (result_tx, result_rx) = channel::<Action>();
    let state: SharedState = Arc::new(RwLock::new(AppState::new(app_config)));

    // An optional positional argument prefills the username field
    if let Some(username) = std::env::args().nth(1) {
        if action_tx
            .send(Action::Search(SearchAction::SetQuery(username)))
            .is_err()
        {
            log::error!("Failed to prefill username");
        }
    }

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, &state, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Let the worker wind down; it exits once it sees Quit or the channel closes
    if action_tx.send(Action::Global(GlobalAction::Quit)).is_err() {
        log::debug!("Background worker already stopped");
    }
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting gh-user-lookup");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> Result<()> {
    loop {
        {
            let state = state
                .read()
                .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            if !state.running {
                break;
            }
            terminal.draw(|frame| views::render(&state, frame.area(), frame))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Background worker is gone, stopping");
                    break;
                }
            }
        }

        // Apply everything the middleware chain forwarded
        let pending: Vec<Action> = result_rx.try_iter().collect();
        if !pending.is_empty() {
            let mut guard = state
                .write()
                .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            for action in &pending {
                let current = std::mem::take(&mut *guard);
                *guard = app_reducer::reduce(current, action);
            }
        }
    }

    Ok(())
}
