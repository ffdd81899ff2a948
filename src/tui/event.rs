//! Event handling for the TUI dashboard.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// TUI events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Nothing happened within the tick rate.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Event handler for the TUI.
pub struct EventHandler {
    /// Tick rate in milliseconds.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event with timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if event polling fails.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
            CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
            _ => Ok(Event::Tick),
        }
    }
}

/// Key action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application.
    Quit,
    /// Reload the config file.
    Reload,
    /// Toggle help.
    Help,
    /// No action.
    None,
}

impl KeyAction {
    /// Parse a key event into an action.
    #[must_use]
    pub const fn from_key_event(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('r') | KeyCode::F(5) => Self::Reload,
            KeyCode::Char('?') | KeyCode::F(1) => Self::Help,
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn reload_and_help_keys() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('r'))), KeyAction::Reload);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('?'))), KeyAction::Help);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('c'))), KeyAction::None);
    }
}
