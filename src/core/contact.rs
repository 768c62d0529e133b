//! Contact form state: four fields, a pending flag and one result notice.
//!
//! The form never talks to the network itself. `begin_submit` hands back the
//! submission to deliver and locks the form; `settle` takes the relay result,
//! unlocks it and clears the fields only when delivery succeeded.

use crate::relay::RelayError;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Inquiry",
            Self::Message => "Tell me about your project...",
        }
    }
}

/// The four values delivered to the relay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("A message is already being sent")]
    AlreadyPending,

    #[error("{} is required", .0.label())]
    MissingField(ContactField),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    /// Local validation hint, nothing was sent
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    pending: bool,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Validate and lock the form, returning what should be sent
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactError> {
        if self.pending {
            return Err(ContactError::AlreadyPending);
        }

        let submission = self.fields.trimmed();
        if let Err(e) = validate(&submission) {
            self.notice = Some(Notice {
                kind: NoticeKind::Hint,
                text: e.to_string(),
            });
            return Err(e);
        }

        self.pending = true;
        self.notice = None;
        debug!(email = %submission.email, "Contact submission started");
        Ok(submission)
    }

    /// Record the relay outcome for the in-flight submission
    pub fn settle(&mut self, result: Result<(), RelayError>) {
        if !self.pending {
            warn!("Ignoring relay result with no submission in flight");
            return;
        }
        self.pending = false;

        match result {
            Ok(()) => {
                self.fields = ContactSubmission::default();
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    text: SUCCESS_MESSAGE.to_string(),
                });
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                self.notice = Some(Notice {
                    kind: NoticeKind::Failure,
                    text: FAILURE_MESSAGE.to_string(),
                });
            }
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn validate(fields: &ContactSubmission) -> Result<(), ContactError> {
    for field in ContactField::ALL {
        if fields.get(field).trim().is_empty() {
            return Err(ContactError::MissingField(field));
        }
    }
    if !email_regex().is_match(fields.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}
