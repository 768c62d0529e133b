//! Shared action vocabulary for the page, modals and the contact form.
//!
//! Translates raw `KeyEvent`s into semantic `MenuAction`s so every view reacts
//! consistently regardless of which one currently has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible page/modal actions
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // Page sections
    NextSection,
    PreviousSection,

    /// Digit key, 1-based (section on the page, dot in a gallery)
    JumpTo(usize),

    // Gallery filter chips
    NextFilter,
    PreviousFilter,

    // Field Navigation (forms)
    NextField,
    PreviousField,

    // Selection/Confirmation
    Select, // Enter - open gallery, press button, confirm dialog
    Cancel, // Esc - close modal or leave form
    Submit, // Ctrl+s

    // Links
    OpenLink,
    OpenResume,
    OpenWhatsApp,

    Quit,

    // No action (key not bound or not applicable in this context)
    None,
}

/// Context for action resolution - determines which actions are valid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionContext {
    Page,    // Browsing sections
    Gallery, // Screenshot modal
    Form,    // Contact form (unbound keys go to the focused field)
    Dialog,  // Yes/no popup
}

/// Convert KeyEvent to string representation for matching against bindings
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    // Add modifiers
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    // Add key code
    let key_str = match key.code {
        KeyCode::Char(c) => {
            // Shifted letters already arrive uppercase
            if c.is_ascii_alphabetic() || !c.is_ascii() {
                parts.retain(|p| *p != "Shift");
            }
            c.to_string()
        }
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            // BackTab may or may not carry SHIFT depending on the terminal
            if !parts.contains(&"Shift") {
                parts.push("Shift");
            }
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(), // Unrecognized key
    };

    parts.push(&key_str);
    parts.join("+")
}

/// Resolve a key to an action using the built-in bindings for `context`
pub fn resolve_action(key: KeyEvent, context: ActionContext) -> MenuAction {
    let combo = key_event_to_string(key);

    // Ctrl+C always quits, even mid-form
    if combo == "Ctrl+c" {
        return MenuAction::Quit;
    }

    match context {
        ActionContext::Page => match combo.as_str() {
            "Tab" | "Right" => MenuAction::NextSection,
            "Shift+Tab" | "Left" => MenuAction::PreviousSection,
            "Up" | "k" => MenuAction::NavigateUp,
            "Down" | "j" => MenuAction::NavigateDown,
            "Enter" => MenuAction::Select,
            "o" => MenuAction::OpenLink,
            "r" => MenuAction::OpenResume,
            "w" => MenuAction::OpenWhatsApp,
            "q" => MenuAction::Quit,
            other => digit(other).map_or(MenuAction::None, MenuAction::JumpTo),
        },
        ActionContext::Gallery => match combo.as_str() {
            "Left" | "h" => MenuAction::NavigateLeft,
            "Right" | "l" => MenuAction::NavigateRight,
            "Tab" => MenuAction::NextFilter,
            "Shift+Tab" => MenuAction::PreviousFilter,
            "o" => MenuAction::OpenLink,
            "Esc" | "q" => MenuAction::Cancel,
            other => digit(other).map_or(MenuAction::None, MenuAction::JumpTo),
        },
        ActionContext::Form => match combo.as_str() {
            "Tab" | "Down" => MenuAction::NextField,
            "Shift+Tab" | "Up" => MenuAction::PreviousField,
            "Enter" => MenuAction::Select,
            "Ctrl+s" => MenuAction::Submit,
            "Esc" => MenuAction::Cancel,
            _ => MenuAction::None,
        },
        ActionContext::Dialog => match combo.as_str() {
            "Enter" | "y" => MenuAction::Select,
            "Esc" | "n" | "q" => MenuAction::Cancel,
            _ => MenuAction::None,
        },
    }
}

fn digit(combo: &str) -> Option<usize> {
    match combo.parse::<usize>() {
        Ok(n @ 1..=9) => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_event_to_string() {
        let k = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_string(k), "Ctrl+s");

        let k = key(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_string(k), "Shift+Up");

        let k = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_event_to_string(k), "Enter");

        let k = key(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_string(k), "Q");
    }

    #[test]
    fn test_backtab_is_shift_tab() {
        let k = key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_string(k), "Shift+Tab");

        let k = key(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(key_event_to_string(k), "Shift+Tab");
    }

    #[test]
    fn test_page_bindings() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            resolve_action(key(KeyCode::Tab, none), ActionContext::Page),
            MenuAction::NextSection
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('5'), none), ActionContext::Page),
            MenuAction::JumpTo(5)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('0'), none), ActionContext::Page),
            MenuAction::None
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('q'), none), ActionContext::Page),
            MenuAction::Quit
        );
    }

    #[test]
    fn test_gallery_bindings() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            resolve_action(key(KeyCode::Right, none), ActionContext::Gallery),
            MenuAction::NavigateRight
        );
        assert_eq!(
            resolve_action(key(KeyCode::BackTab, KeyModifiers::SHIFT), ActionContext::Gallery),
            MenuAction::PreviousFilter
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('3'), none), ActionContext::Gallery),
            MenuAction::JumpTo(3)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Esc, none), ActionContext::Gallery),
            MenuAction::Cancel
        );
    }

    #[test]
    fn test_form_leaves_text_keys_unbound() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            resolve_action(key(KeyCode::Char('q'), none), ActionContext::Form),
            MenuAction::None
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('5'), none), ActionContext::Form),
            MenuAction::None
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('s'), KeyModifiers::CONTROL), ActionContext::Form),
            MenuAction::Submit
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL), ActionContext::Form),
            MenuAction::Quit
        );
    }
}
