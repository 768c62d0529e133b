//! UI State - Section focus, modal mode and status line
//!
//! This module contains UI state that is independent of rendering.
//! The TUI frontend reads from these structures to decide what to draw.

use serde::{Deserialize, Serialize};

/// Page sections, in scroll order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Hero,
    Education,
    Experience,
    Certifications,
    Projects,
    TechStack,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Education,
        Section::Experience,
        Section::Certifications,
        Section::Projects,
        Section::TechStack,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "About",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Certifications => "Certifications",
            Self::Projects => "Projects",
            Self::TechStack => "Tech Stack",
            Self::Contact => "Contact",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Map a 1-based digit key to a section
    pub fn from_digit(digit: u32) -> Option<Self> {
        let index = (digit as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

/// Input mode for the application
#[derive(Clone, Debug, PartialEq)]
pub enum InputMode {
    /// Browsing page sections
    Normal,
    /// A project gallery modal is open
    Gallery,
    /// Typing into the contact form
    ContactForm,
    /// WhatsApp hand-off dialog is open
    WhatsApp,
}

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Section currently on screen
    pub section: Section,

    /// Current input mode
    pub input_mode: InputMode,

    /// Highlighted card in the projects section
    pub selected_project: usize,

    /// Status bar text
    pub status_text: String,
}

impl UiState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            input_mode: InputMode::Normal,
            selected_project: 0,
            status_text: String::from("Tab: next section  1-7: jump  q: quit"),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.previous(), Section::Contact);
        assert_eq!(Section::Projects.next(), Section::TechStack);
    }

    #[test]
    fn test_section_from_digit() {
        assert_eq!(Section::from_digit(1), Some(Section::Hero));
        assert_eq!(Section::from_digit(7), Some(Section::Contact));
        assert_eq!(Section::from_digit(0), None);
        assert_eq!(Section::from_digit(8), None);
    }

    #[test]
    fn test_section_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            section: Section,
        }
        let parsed: Wrapper = toml::from_str("section = \"tech_stack\"").unwrap();
        assert_eq!(parsed.section, Section::TechStack);
    }
}
