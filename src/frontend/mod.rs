//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from the page logic in `AppCore`.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, resize, paste) converted to the
    /// frontend-agnostic `FrontendEvent` enum, or an empty list on timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Mutable because the contact form syncs its text fields with the core
    /// form during rendering (e.g. after a successful send clears it).
    fn render(&mut self, app: &mut AppCore) -> Result<()>;

    /// Restore the terminal before the application exits
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in characters, as `(width, height)`
    fn size(&self) -> (u16, u16);
}
