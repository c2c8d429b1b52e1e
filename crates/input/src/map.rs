//! Key mapping from terminal events to panel actions.

use crate::types::Finger;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Flip one finger contact
    Toggle(Finger),
    /// Release every contact
    ClearContacts,
    /// Start a new game (same effect as `/start-game`)
    NewGame,
}

/// Map keyboard input to panel actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PanelAction> {
    match key.code {
        // Fingers, by initial or by position on the hand
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char('1') => {
            Some(PanelAction::Toggle(Finger::Thumb))
        }
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('2') => {
            Some(PanelAction::Toggle(Finger::Index))
        }
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Char('3') => {
            Some(PanelAction::Toggle(Finger::Middle))
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('4') => {
            Some(PanelAction::Toggle(Finger::Ring))
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('5') => {
            Some(PanelAction::Toggle(Finger::Little))
        }

        KeyCode::Char(' ') | KeyCode::Backspace => Some(PanelAction::ClearContacts),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => Some(PanelAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the rig.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
