//! Keybinding system
//!
//! Maps keyboard input to commands for views without text input. Key patterns
//! are textual (e.g. "ctrl+o", "shift+tab", "G") and parsed once when the
//! keymap is built.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, GlobalAction, NavigationAction, ResultsAction};
use crate::views::HelpView;

/// Semantic commands a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Switch between the input field and the repository list
    ResultsToggleFocus,
    /// Jump back to the input field
    ResultsFocusInput,
    ResultsOpenRepository,
    ResultsOpenProfile,
    HelpToggleView,
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert the command into the action it dispatches
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),
            Self::ResultsToggleFocus => Action::Results(ResultsAction::ToggleFocus),
            Self::ResultsFocusInput => Action::Results(ResultsAction::FocusInput),
            Self::ResultsOpenRepository => Action::Results(ResultsAction::OpenSelectedRepository),
            Self::ResultsOpenProfile => Action::Results(ResultsAction::OpenProfile),
            Self::HelpToggleView => Action::Global(GlobalAction::PushView(Box::new(HelpView::new()))),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g. "ctrl+o", "shift+tab"
    pub keys: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "G" (case-sensitive, uppercase implies SHIFT)
/// - With modifiers: "ctrl+o", "shift+tab"
/// - Special keys: "tab", "backtab", "enter", "esc", "up", "down", "home", "end", "f1"
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(KeyPattern { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// A collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a keymap, skipping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern: {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in binding order
    ///
    /// Several commands may share a key; the caller picks the first one the
    /// active view accepts.
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| Self::matches(pattern, key))
            .map(|(binding, _)| binding.command)
            .collect()
    }

    fn matches(pattern: &KeyPattern, key: &KeyEvent) -> bool {
        if pattern.code != key.code {
            return false;
        }
        match key.code {
            // Terminals disagree on whether SHIFT accompanies uppercase chars and symbols
            KeyCode::Char(_) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                key.modifiers & relevant == pattern.modifiers & relevant
            }
            _ => key.modifiers == pattern.modifiers,
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", NavigateNext),
        KeyBinding::new("down", NavigateNext),
        KeyBinding::new("k", NavigatePrevious),
        KeyBinding::new("up", NavigatePrevious),
        KeyBinding::new("g", NavigateToTop),
        KeyBinding::new("home", NavigateToTop),
        KeyBinding::new("G", NavigateToBottom),
        KeyBinding::new("end", NavigateToBottom),
        // Results
        KeyBinding::new("tab", ResultsToggleFocus),
        KeyBinding::new("backtab", ResultsToggleFocus),
        KeyBinding::new("shift+backtab", ResultsToggleFocus),
        KeyBinding::new("/", ResultsFocusInput),
        KeyBinding::new("enter", ResultsOpenRepository),
        KeyBinding::new("o", ResultsOpenProfile),
        // Help
        KeyBinding::new("?", HelpToggleView),
        // General
        KeyBinding::new("q", GlobalClose),
        KeyBinding::new("ctrl+c", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_single_chars_keep_case() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(KeyPattern {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
        assert_eq!(
            parse_key_pattern("g"),
            Some(KeyPattern {
                code: KeyCode::Char('g'),
                modifiers: KeyModifiers::NONE
            })
        );
    }

    #[test]
    fn test_parse_modifiers_and_special_keys() {
        assert_eq!(
            parse_key_pattern("ctrl+o"),
            Some(KeyPattern {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("F1").map(|p| p.code),
            Some(KeyCode::F(1))
        );
        assert_eq!(parse_key_pattern("hyper+x"), None);
        assert_eq!(parse_key_pattern("nonsense"), None);
    }

    #[test]
    fn test_match_navigation_keys() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('j'), KeyModifiers::NONE)),
            vec![CommandId::NavigateNext]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Up, KeyModifiers::NONE)),
            vec![CommandId::NavigatePrevious]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            vec![CommandId::NavigateToBottom]
        );
    }

    #[test]
    fn test_char_match_ignores_shift() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            vec![CommandId::HelpToggleView]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::NONE)),
            vec![CommandId::NavigateToBottom]
        );
    }

    #[test]
    fn test_control_modifier_must_match() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![CommandId::GlobalQuit]
        );
        assert!(keymap
            .match_key(&key(KeyCode::Char('j'), KeyModifiers::CONTROL))
            .is_empty());
    }

    #[test]
    fn test_enter_opens_repository() {
        let keymap = default_keymap();
        let commands = keymap.match_key(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(commands, vec![CommandId::ResultsOpenRepository]);
        assert!(matches!(
            commands[0].to_action(),
            Action::Results(ResultsAction::OpenSelectedRepository)
        ));
    }

    #[test]
    fn test_invalid_patterns_are_skipped() {
        let keymap = Keymap::new(vec![
            KeyBinding::new("bogus+x", CommandId::GlobalQuit),
            KeyBinding::new("q", CommandId::GlobalClose),
        ]);
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            vec![CommandId::GlobalClose]
        );
        assert!(keymap
            .match_key(&key(KeyCode::Char('x'), KeyModifiers::NONE))
            .is_empty());
    }
}
