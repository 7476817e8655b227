//! Global actions - not tied to any specific screen
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the current view, or step back out of the repository list
    Close,
    /// Quit the application
    Quit,
    /// Push a floating view onto the stack
    PushView(Box<dyn View>),
    /// Periodic tick for the loading animation
    Tick,
}
