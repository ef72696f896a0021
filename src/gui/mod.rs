//! GUI module
//!
//! Provides the Slint launcher window: a category sidebar, a filter box and
//! the item list, kept in sync with the listing session.

pub mod gui_controller;

pub use gui_controller::GuiController;
