//! Input routing for the page and its modals
//!
//! Routes keyboard input to the appropriate MenuAction based on:
//! - Current InputMode (which view has focus)
//! - The view's context (page vs gallery vs form vs dialog)

use crate::core::menu_actions::{resolve_action, ActionContext, MenuAction};
use crate::data::ui_state::InputMode;
use crossterm::event::KeyEvent;

/// Route a key event to a MenuAction based on current context
pub fn route_input(key: KeyEvent, mode: &InputMode) -> MenuAction {
    let context = get_action_context(mode);
    resolve_action(key, context)
}

/// Map InputMode to ActionContext for key resolution
fn get_action_context(mode: &InputMode) -> ActionContext {
    match mode {
        InputMode::Normal => ActionContext::Page,
        InputMode::Gallery => ActionContext::Gallery,
        InputMode::ContactForm => ActionContext::Form,
        InputMode::WhatsApp => ActionContext::Dialog,
    }
}

/// Check if unbound keys in this mode should be forwarded to a text field
pub fn forwards_text_input(mode: &InputMode) -> bool {
    matches!(mode, InputMode::ContactForm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_context_mapping() {
        assert!(matches!(
            get_action_context(&InputMode::Normal),
            ActionContext::Page
        ));
        assert!(matches!(
            get_action_context(&InputMode::Gallery),
            ActionContext::Gallery
        ));
        assert!(matches!(
            get_action_context(&InputMode::ContactForm),
            ActionContext::Form
        ));
        assert!(matches!(
            get_action_context(&InputMode::WhatsApp),
            ActionContext::Dialog
        ));
    }

    #[test]
    fn test_same_key_differs_by_mode() {
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            route_input(left, &InputMode::Normal),
            MenuAction::PreviousSection
        );
        assert_eq!(
            route_input(left, &InputMode::Gallery),
            MenuAction::NavigateLeft
        );
    }

    #[test]
    fn test_text_forwarding() {
        assert!(forwards_text_input(&InputMode::ContactForm));
        assert!(!forwards_text_input(&InputMode::Gallery));
        assert!(!forwards_text_input(&InputMode::Normal));
    }
}
