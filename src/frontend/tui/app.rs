use crate::core::menu_actions::MenuAction;
use crate::core::AppCore;
use crate::data::ui_state::InputMode;
use crate::frontend::tui::contact_form::ContactFormWidget;
use crate::frontend::tui::gallery_modal::GalleryModalView;
use crate::frontend::tui::page;
use crate::frontend::tui::whatsapp_modal::WhatsAppModal;
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Widget, Terminal};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// This frontend renders the page using ratatui (terminal UI library)
/// and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    contact_form: ContactFormWidget,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables bracketed paste, and enters alternate screen.
    pub fn new() -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16), // ~60 FPS
            contact_form: ContactFormWidget::new(),
            restored: false,
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            Event::Paste(text) => Some(FrontendEvent::Paste { text }),
            _ => None,
        }
    }

    /// Let the contact form widget consume a key first.
    ///
    /// Returns the action left for the core, if any.
    pub fn handle_contact_key(&mut self, key: KeyEvent, core: &mut AppCore) -> Option<MenuAction> {
        let action = self.contact_form.handle_key(key, &mut core.contact);
        core.needs_render = true;
        action
    }

    /// Paste into the focused contact field (ignored outside the form)
    pub fn handle_paste(&mut self, text: &str, core: &mut AppCore) {
        if core.ui_state.input_mode == InputMode::ContactForm {
            self.contact_form.paste(text, &mut core.contact);
            core.needs_render = true;
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Poll events with timeout
        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, core: &mut AppCore) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        let contact_form = &mut self.contact_form;

        self.terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            page::render(core, contact_form, today, area, buf);

            match core.ui_state.input_mode {
                InputMode::Gallery => {
                    if let Some(modal) = &core.gallery {
                        GalleryModalView::new(modal).render(area, buf);
                    }
                }
                InputMode::WhatsApp => {
                    if let Some(number) = &core.portfolio.profile.whatsapp {
                        WhatsAppModal::new(number).render(area, buf);
                    }
                }
                InputMode::Normal | InputMode::ContactForm => {}
            }
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_convert_ignores_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TuiFrontend::convert_event(Event::Key(release)), None);

        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            TuiFrontend::convert_event(Event::Key(press)),
            Some(FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE))
        );
    }

    #[test]
    fn test_convert_paste_and_resize() {
        assert_eq!(
            TuiFrontend::convert_event(Event::Paste("hi".to_string())),
            Some(FrontendEvent::paste("hi".to_string()))
        );
        assert_eq!(
            TuiFrontend::convert_event(Event::Resize(80, 24)),
            Some(FrontendEvent::resize(80, 24))
        );
        assert_eq!(TuiFrontend::convert_event(Event::FocusGained), None);
    }
}
