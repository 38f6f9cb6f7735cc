//! Key to command routing
//!
//! Routing never validates; the round decides whether a command does anything.

use crate::game::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a virtual key name (as sent by a browser or GUI layer) to a command
///
/// # Examples
/// ```
/// use wordle_game::game::Command;
/// use wordle_game::input::route_key;
///
/// assert_eq!(route_key("Q"), Some(Command::AppendLetter('q')));
/// assert_eq!(route_key("Enter"), Some(Command::SubmitGuess));
/// assert_eq!(route_key("Shift"), None);
/// ```
#[must_use]
pub fn route_key(key: &str) -> Option<Command> {
    let mut chars = key.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return letter
            .is_ascii_alphabetic()
            .then(|| Command::AppendLetter(letter.to_ascii_lowercase()));
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(Command::SubmitGuess),
        "backspace" | "delete" => Some(Command::DeleteLetter),
        _ => None,
    }
}

/// Map a terminal key event to a command
///
/// Only presses are routed, and chords with Ctrl or Alt are left to the caller.
#[must_use]
pub fn route_key_event(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press
        || event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match event.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(Command::AppendLetter(c.to_ascii_lowercase()))
        }
        KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteLetter),
        KeyCode::Enter => Some(Command::SubmitGuess),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_append_lowercased() {
        assert_eq!(route_key("a"), Some(Command::AppendLetter('a')));
        assert_eq!(route_key("Z"), Some(Command::AppendLetter('z')));
    }

    #[test]
    fn named_keys_case_insensitive() {
        for key in ["Enter", "ENTER", "return", "Return"] {
            assert_eq!(route_key(key), Some(Command::SubmitGuess), "{key}");
        }
        for key in ["Backspace", "BACKSPACE", "Delete", "delete"] {
            assert_eq!(route_key(key), Some(Command::DeleteLetter), "{key}");
        }
    }

    #[test]
    fn everything_else_ignored() {
        for key in ["", "1", " ", "é", "Tab", "ArrowLeft", "ab", "Escape"] {
            assert_eq!(route_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn key_events_map_like_names() {
        assert_eq!(
            route_key_event(&KeyEvent::from(KeyCode::Char('W'))),
            Some(Command::AppendLetter('w'))
        );
        assert_eq!(
            route_key_event(&KeyEvent::from(KeyCode::Enter)),
            Some(Command::SubmitGuess)
        );
        assert_eq!(
            route_key_event(&KeyEvent::from(KeyCode::Backspace)),
            Some(Command::DeleteLetter)
        );
        assert_eq!(
            route_key_event(&KeyEvent::from(KeyCode::Delete)),
            Some(Command::DeleteLetter)
        );
        assert_eq!(route_key_event(&KeyEvent::from(KeyCode::Esc)), None);
        assert_eq!(route_key_event(&KeyEvent::from(KeyCode::Char('7'))), None);
    }

    #[test]
    fn shifted_letters_still_route() {
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(route_key_event(&event), Some(Command::AppendLetter('a')));
    }

    #[test]
    fn chords_and_releases_ignored() {
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let alt = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert_eq!(route_key_event(&ctrl), None);
        assert_eq!(route_key_event(&alt), None);
        assert_eq!(route_key_event(&release), None);
    }
}
