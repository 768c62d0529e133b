//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod app;
pub mod contact_form;
pub mod gallery_modal;
pub mod page;
pub mod whatsapp_modal;

pub use app::TuiFrontend;
