//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture mapped to line-editing actions
//! - Ctrl+C / Escape graceful exit
//! - 50-character cap on name entry (enforced by the caller)

use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// Longest name the entry field accepts.
pub const MAX_NAME_LEN: usize = 50;

/// What a keystroke means to the name-entry loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Add a character to the field.
    Insert(char),
    /// Delete the last character.
    Erase,
    /// Submit the field as typed.
    Submit,
    /// Leave the program (Ctrl+C or Escape).
    Quit,
}

/// Handles user input from the terminal.
pub struct InputHandler {
    /// Timeout for poll operations.
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create a new input handler with the default 50ms poll timeout.
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input.
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore the terminal.
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll once for a keystroke, mapping it to an action.
    /// Returns `None` on timeout or on keys the game does not use.
    pub fn poll_action(&self) -> Result<Option<KeyAction>, Box<dyn std::error::Error>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        match event::read()? {
            event::Event::Key(key) => Ok(Self::map_key(&key)),
            _ => Ok(None),
        }
    }

    /// Block until the next mapped keystroke.
    pub fn wait_action(&self) -> Result<KeyAction, Box<dyn std::error::Error>> {
        loop {
            if let Some(action) = self.poll_action()? {
                return Ok(action);
            }
        }
    }

    fn map_key(key: &KeyEvent) -> Option<KeyAction> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyAction::Quit)
            }
            KeyCode::Esc => Some(KeyAction::Quit),
            KeyCode::Backspace => Some(KeyAction::Erase),
            KeyCode::Enter => Some(KeyAction::Submit),
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    Some(KeyAction::Insert(c))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_characters_insert() {
        let action = InputHandler::map_key(&key(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(action, Some(KeyAction::Insert('a')));
    }

    #[test]
    fn test_ctrl_c_and_escape_quit() {
        let action = InputHandler::map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Some(KeyAction::Quit));
        let action = InputHandler::map_key(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(action, Some(KeyAction::Quit));
    }

    #[test]
    fn test_modified_characters_ignored() {
        let action = InputHandler::map_key(&key(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(action, None);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(KeyAction::Erase)
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyAction::Submit)
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
    }
}
