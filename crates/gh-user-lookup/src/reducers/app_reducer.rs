use crate::actions::{Action, GlobalAction};
use crate::reducers::{lookup_reducer, results_reducer, search_form_reducer};
use crate::state::{AppState, Focus};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    if let Action::Global(global) = action {
        match global {
            GlobalAction::Quit => {
                state.running = false;
                return state;
            }
            GlobalAction::PushView(new_view) => {
                // Pushing the view that is already on top toggles it off
                let is_duplicate = state
                    .view_stack
                    .last()
                    .map(|top| top.view_id() == new_view.view_id())
                    .unwrap_or(false);

                if is_duplicate {
                    log::debug!(
                        "Popping view from the stack, because this view is on top already: {:?}",
                        new_view.view_id()
                    );
                    state.view_stack.pop();
                } else {
                    log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                    state.view_stack.push(new_view.clone());
                }
            }
            GlobalAction::Close => {
                // Close order: floating view, then repository focus, then the app
                if state.view_stack.len() > 1 {
                    let popped = state.view_stack.pop();
                    log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
                } else if state.results.focus == Focus::Repositories {
                    state.results.focus = Focus::Input;
                } else {
                    log::debug!("Closing last view - quitting application");
                    state.running = false;
                }
            }
            GlobalAction::Tick => {
                if state.lookup.is_loading() {
                    state.tick = state.tick.wrapping_add(1);
                }
            }
            // Raw keys are translated by the keyboard middleware
            GlobalAction::KeyPressed(_) => {}
        }
    }

    // Run sub-reducers for component-specific actions
    state.search_form = search_form_reducer::reduce(state.search_form, action);
    state.lookup = lookup_reducer::reduce(state.lookup, action);
    let repository_count = state.lookup.repositories().len();
    state.results = results_reducer::reduce(state.results, action, repository_count);

    state
}
