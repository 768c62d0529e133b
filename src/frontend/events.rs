//! Frontend-agnostic input events.
//!
//! The terminal frontend translates its native crossterm stream into this
//! enum so the core logic only handles one event shape.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events emitted by the frontend, converted to one unified format
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Paste event (bracketed paste from the terminal)
    Paste { text: String },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a paste event
    pub fn paste(text: String) -> Self {
        Self::Paste { text }
    }

    /// Rebuild the crossterm key event for routing, if this is a key
    pub fn as_key_event(&self) -> Option<KeyEvent> {
        match self {
            Self::Key { code, modifiers } => Some(KeyEvent::new(*code, *modifiers)),
            _ => None,
        }
    }
}
