//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Ctrl+O, F1, Esc).
//!
//! ## Layer 2: Capabilities
//! Views with the TEXT_INPUT capability receive characters, Backspace and
//! Enter as text input instead of keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! This prevents actions from "leaking" to reducers when a different view is active.

use crate::actions::{Action, GlobalAction, ResultsAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keymap::{default_keymap, Keymap};
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::HelpView;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware {
    keymap: Keymap,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self::with_keymap(default_keymap())
    }

    pub fn with_keymap(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Dispatch `action` if the active view accepts it
    fn dispatch_gated(action: Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match state.active_view() {
            Some(view) if !view.accepts_action(&action) => {
                log::debug!(
                    "Action {:?} rejected by view {:?}",
                    action,
                    view.view_id()
                );
                false
            }
            _ => {
                dispatcher.dispatch(action);
                true
            }
        }
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let capabilities = state
            .active_view()
            .map(|v| v.capabilities(state))
            .unwrap_or_default();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if ctrl && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if ctrl && key.code == KeyCode::Char('o') {
            log::debug!("Layer 1: Ctrl+O - opening profile");
            Self::dispatch_gated(Action::Results(ResultsAction::OpenProfile), state, dispatcher);
            return;
        }

        if key.code == KeyCode::F(1) {
            dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                HelpView::new(),
            ))));
            return;
        }

        // Esc: a text input view decides itself, everything else closes
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            match key.code {
                KeyCode::Char('u') if ctrl => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                }
                KeyCode::Char(c)
                    if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                }
                KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                    // Cmd+Backspace on Mac - clear entire line
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                }
                KeyCode::Backspace => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    Self::dispatch_gated(
                        Action::Results(ResultsAction::ToggleFocus),
                        state,
                        dispatcher,
                    );
                }
                _ => log::debug!("Layer 2: ignoring {:?} in text input", key.code),
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for command in self.keymap.match_key(&key) {
            if Self::dispatch_gated(command.to_action(), state, dispatcher) {
                log::debug!("Layer 3: Command {:?} accepted by view", command);
                return;
            }
        }

        log::debug!("Layer 3: no command for {:?}", key);
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducers
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::NavigationAction;
    use crate::middleware::testing::recording_dispatcher;
    use crate::state::Focus;
    use std::sync::mpsc::Receiver;

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let (dispatcher, rx): (Dispatcher, Receiver<Action>) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        let forwarded = middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers))),
            state,
            &dispatcher,
        );
        assert!(!forwarded, "raw keys must be consumed");
        rx.try_iter().collect()
    }

    fn list_focused() -> AppState {
        let mut state = AppState::default();
        state.results.focus = Focus::Repositories;
        state
    }

    fn with_help() -> AppState {
        let mut state = AppState::default();
        state.view_stack.push(Box::new(HelpView::new()));
        state
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        for state in [AppState::default(), list_focused(), with_help()] {
            let actions = press(&state, KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert!(matches!(
                actions.as_slice(),
                [Action::Global(GlobalAction::Quit)]
            ));
        }
    }

    #[test]
    fn test_chars_go_to_text_input() {
        let actions = press(&AppState::default(), KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('j'))]
        ));
    }

    #[test]
    fn test_enter_confirms_input() {
        let actions = press(&AppState::default(), KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Confirm)]
        ));
    }

    #[test]
    fn test_ctrl_u_and_cmd_backspace_clear_line() {
        let actions = press(&AppState::default(), KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::ClearLine)]
        ));

        let actions = press(&AppState::default(), KeyCode::Backspace, KeyModifiers::SUPER);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::ClearLine)]
        ));
    }

    #[test]
    fn test_tab_toggles_focus_from_input() {
        let actions = press(&AppState::default(), KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Results(ResultsAction::ToggleFocus)]
        ));
    }

    #[test]
    fn test_esc_in_input_routes_to_text_input() {
        let actions = press(&AppState::default(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_esc_in_list_closes() {
        let actions = press(&list_focused(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_list_keys_use_keymap() {
        let state = list_focused();

        let actions = press(&state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));

        let actions = press(&state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Results(ResultsAction::OpenSelectedRepository)]
        ));

        let actions = press(&state, KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Results(ResultsAction::ToggleFocus)]
        ));
    }

    #[test]
    fn test_ctrl_o_opens_profile_from_either_focus() {
        for state in [AppState::default(), list_focused()] {
            let actions = press(&state, KeyCode::Char('o'), KeyModifiers::CONTROL);
            assert!(matches!(
                actions.as_slice(),
                [Action::Results(ResultsAction::OpenProfile)]
            ));
        }
    }

    #[test]
    fn test_help_view_gates_result_actions() {
        let state = with_help();

        assert!(press(&state, KeyCode::Char('j'), KeyModifiers::NONE).is_empty());
        assert!(press(&state, KeyCode::Char('o'), KeyModifiers::CONTROL).is_empty());

        let actions = press(&state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_f1_pushes_help() {
        let actions = press(&AppState::default(), KeyCode::F(1), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::PushView(_))]
        ));
    }
}
