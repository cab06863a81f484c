//! Key press decoding.
//!
//! Maps crossterm key events to [`InputAction`]s. Bound letters (`e`, `j`,
//! `k`) take precedence over query input, so they cannot be typed into the
//! search box.

use super::handler::InputAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Decodes a key event, returning `None` for releases and unbound keys.
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Char('q' | 'Q') if ctrl => Some(InputAction::Quit),
        KeyCode::Char('c' | 'C') if ctrl => Some(InputAction::Copy),
        KeyCode::Up => Some(InputAction::Up),
        KeyCode::Down => Some(InputAction::Down),
        KeyCode::Backspace => Some(InputAction::Backspace),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char('e') => Some(InputAction::Edit),
        KeyCode::Char('k') => Some(InputAction::Up),
        KeyCode::Char('j') => Some(InputAction::Down),
        KeyCode::Char(c) if (' '..='~').contains(&c) => Some(InputAction::Char(c)),
        _ => None,
    }
}
