//! Data layer - Pure state without UI coupling
//!
//! Portfolio content and UI state as pure data structures.
//! NO imports from frontend/ or any rendering code.
//! The TUI frontend reads from these structures to render.

pub mod portfolio;
pub mod ui_state;

pub use portfolio::Portfolio;
pub use ui_state::*;
