use crate::config::Config;
use crate::core::contact::{ContactError, ContactForm};
use crate::core::gallery::GalleryError;
use crate::core::menu_actions::MenuAction;
use crate::data::portfolio::Portfolio;
use crate::data::ui_state::{InputMode, Section, UiState};
use crate::links;
use crate::relay::{ContactRelay, RelayError};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

pub use crate::core::gallery::GalleryModal;

/// Result of one relay delivery, sent back to the event loop
pub type RelayOutcome = std::result::Result<(), RelayError>;

/// Opens a URL outside the terminal (browser, mail client, WhatsApp)
pub type LinkOpener = Box<dyn Fn(&str) -> Result<()> + Send>;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the portfolio content, which section is on screen, the open
/// gallery modal and the contact form. Frontends read it to render and feed it
/// `MenuAction`s; relay results come back through `on_relay_result`.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Content shown on the page
    pub portfolio: Portfolio,

    /// Section, focus and status bar
    pub ui_state: UiState,

    /// Open gallery modal, if any
    pub gallery: Option<GalleryModal>,

    /// Contact form values and submission state
    pub contact: ContactForm,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,

    relay: Arc<dyn ContactRelay>,
    relay_tx: UnboundedSender<RelayOutcome>,
    opener: LinkOpener,
}

impl AppCore {
    pub fn new(
        config: Config,
        portfolio: Portfolio,
        relay: Arc<dyn ContactRelay>,
        relay_tx: UnboundedSender<RelayOutcome>,
    ) -> Self {
        let ui_state = UiState::new(config.ui.start_section);
        Self {
            config,
            portfolio,
            ui_state,
            gallery: None,
            contact: ContactForm::new(),
            running: true,
            needs_render: true,
            relay,
            relay_tx,
            opener: Box::new(links::open_url),
        }
    }

    /// Replace how links are opened
    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Dispatch an action for the current input mode.
    ///
    /// Contact form keys go through the form widget first; only its results
    /// (`Submit`, `Cancel`, `Quit`) reach this method.
    pub fn handle_action(&mut self, action: MenuAction) {
        if action == MenuAction::None {
            return;
        }
        if action == MenuAction::Quit {
            tracing::info!("Quit requested");
            self.running = false;
            return;
        }

        match self.ui_state.input_mode {
            InputMode::Normal => self.handle_page_action(action),
            InputMode::Gallery => self.handle_gallery_action(action),
            InputMode::ContactForm => self.handle_form_action(action),
            InputMode::WhatsApp => self.handle_dialog_action(action),
        }
        self.needs_render = true;
    }

    fn handle_page_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::NextSection => self.show_section(self.ui_state.section.next()),
            MenuAction::PreviousSection => self.show_section(self.ui_state.section.previous()),
            MenuAction::JumpTo(digit) => {
                if let Some(section) = Section::from_digit(digit as u32) {
                    self.show_section(section);
                }
            }
            MenuAction::NavigateUp if self.ui_state.section == Section::Projects => {
                self.ui_state.selected_project = self.ui_state.selected_project.saturating_sub(1);
            }
            MenuAction::NavigateDown if self.ui_state.section == Section::Projects => {
                let last = self.portfolio.projects.len().saturating_sub(1);
                self.ui_state.selected_project = (self.ui_state.selected_project + 1).min(last);
            }
            MenuAction::Select => match self.ui_state.section {
                Section::Projects => self.open_gallery(),
                Section::Contact => self.enter_form(),
                _ => {}
            },
            MenuAction::OpenLink => self.open_section_link(),
            MenuAction::OpenResume => match self.portfolio.profile.resume_url.clone() {
                Some(url) => self.open_link(&url),
                None => self.ui_state.set_status("No resume available"),
            },
            MenuAction::OpenWhatsApp => {
                if self.portfolio.profile.whatsapp.is_some() {
                    self.ui_state.input_mode = InputMode::WhatsApp;
                } else {
                    self.ui_state.set_status("No WhatsApp number configured");
                }
            }
            _ => {}
        }
    }

    fn show_section(&mut self, section: Section) {
        tracing::debug!("Showing section {:?}", section);
        self.ui_state.section = section;
        self.ui_state.set_status(section_hint(section));
    }

    fn open_section_link(&mut self) {
        let url = match self.ui_state.section {
            Section::Projects => self
                .portfolio
                .project(self.ui_state.selected_project)
                .map(|p| p.link.clone()),
            Section::Certifications => self
                .portfolio
                .certifications
                .first()
                .map(|c| c.url.clone()),
            _ => self.portfolio.profile.links.first().map(|l| l.url.clone()),
        };
        match url {
            Some(url) => self.open_link(&url),
            None => self.ui_state.set_status("Nothing to open here"),
        }
    }

    fn open_link(&mut self, url: &str) {
        match (self.opener)(url) {
            Ok(()) => self.ui_state.set_status(format!("Opened {}", url)),
            Err(e) => {
                tracing::warn!("Failed to open link: {:#}", e);
                self.ui_state.set_status(format!("Could not open {}", url));
            }
        }
    }

    /// Open the selected project's gallery, starting at "All" and index 0
    pub fn open_gallery(&mut self) {
        let Some(project) = self.portfolio.project(self.ui_state.selected_project) else {
            return;
        };
        match project.open_gallery() {
            Some(Ok(modal)) => {
                tracing::debug!("Opened gallery '{}'", modal.title());
                self.gallery = Some(modal);
                self.ui_state.input_mode = InputMode::Gallery;
            }
            Some(Err(e)) => {
                tracing::warn!("Cannot open gallery for '{}': {}", project.title, e);
                self.ui_state.set_status(format!("Gallery unavailable: {}", e));
            }
            None => {
                let status = format!("{} has no screenshots", project.title);
                self.ui_state.set_status(status);
            }
        }
    }

    /// Close the modal; its state is dropped so the next open starts fresh
    pub fn close_gallery(&mut self) {
        self.gallery = None;
        self.ui_state.input_mode = InputMode::Normal;
        self.needs_render = true;
    }

    fn handle_gallery_action(&mut self, action: MenuAction) {
        if action == MenuAction::Cancel {
            self.close_gallery();
            return;
        }
        let Some(modal) = self.gallery.as_mut() else {
            self.ui_state.input_mode = InputMode::Normal;
            return;
        };

        let result = match action {
            MenuAction::NavigateRight => modal.next(),
            MenuAction::NavigateLeft => modal.previous(),
            MenuAction::NextFilter => modal.cycle_filter(true),
            MenuAction::PreviousFilter => modal.cycle_filter(false),
            MenuAction::JumpTo(digit) => modal.jump_to(digit.saturating_sub(1)),
            MenuAction::OpenLink => {
                let url = modal.current_image().map(|image| image.url.clone());
                url.map(|url| self.open_link(&url))
            }
            _ => Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(GalleryError::EmptyCollection) => {
                self.ui_state.set_status("No screenshots in this category");
            }
            Err(e) => {
                tracing::debug!("Gallery action {:?} rejected: {}", action, e);
            }
        }
    }

    fn enter_form(&mut self) {
        self.ui_state.input_mode = InputMode::ContactForm;
        self.ui_state
            .set_status("Tab: next field  Ctrl+S: send  Esc: leave form");
    }

    fn handle_form_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Submit => self.submit_contact(),
            MenuAction::Cancel => {
                self.ui_state.input_mode = InputMode::Normal;
                if self.contact.fields().is_blank() {
                    self.ui_state.set_status(section_hint(self.ui_state.section));
                } else {
                    self.ui_state.set_status("Draft kept  Enter: continue writing");
                }
            }
            _ => {}
        }
    }

    /// Validate the form and hand the submission to the relay.
    ///
    /// Delivery runs on a spawned task; the outcome arrives through the
    /// channel given to `new` and must be passed to `on_relay_result`.
    pub fn submit_contact(&mut self) {
        let submission = match self.contact.begin_submit() {
            Ok(submission) => submission,
            Err(ContactError::AlreadyPending) => {
                tracing::debug!("Submit ignored, a message is already being sent");
                return;
            }
            Err(e) => {
                tracing::debug!("Contact form not submitted: {}", e);
                return;
            }
        };

        tracing::info!("Sending contact message from {}", submission.email);
        self.ui_state.set_status("Sending message...");

        let relay = Arc::clone(&self.relay);
        let tx = self.relay_tx.clone();
        tokio::spawn(async move {
            let result = relay.send(&submission).await;
            if tx.send(result).is_err() {
                tracing::warn!("Relay result dropped, event loop has exited");
            }
        });
    }

    /// Settle the pending submission with the relay's answer
    pub fn on_relay_result(&mut self, result: RelayOutcome) {
        match &result {
            Ok(()) => tracing::info!("Contact message delivered"),
            Err(e) => tracing::error!("Contact message failed: {}", e),
        }
        self.contact.settle(result);
        if let Some(notice) = self.contact.notice() {
            let text = notice.text.clone();
            self.ui_state.set_status(text);
        }
        self.needs_render = true;
    }

    fn handle_dialog_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Select => {
                self.ui_state.input_mode = InputMode::Normal;
                if let Some(number) = self.portfolio.profile.whatsapp.clone() {
                    self.open_link(&links::whatsapp_url(&number));
                }
            }
            MenuAction::Cancel => {
                self.ui_state.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }
}

fn section_hint(section: Section) -> &'static str {
    match section {
        Section::Hero => "r: resume  w: WhatsApp  o: open profile  Tab: next section",
        Section::Projects => "Up/Down: select  Enter: screenshots  o: open project",
        Section::Certifications => "o: view certificate  Tab: next section",
        Section::Contact => "Enter: write a message  w: WhatsApp",
        _ => "Tab: next section  1-7: jump  q: quit",
    }
}
