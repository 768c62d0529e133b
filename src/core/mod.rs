//! Core application logic
//!
//! Gallery navigation, contact form submission and input routing.
//! NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod app_core;
pub mod contact;
pub mod gallery;
pub mod input_router;
pub mod menu_actions;

pub use app_core::AppCore;
