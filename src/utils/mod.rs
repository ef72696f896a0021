//! Utility modules
//!
//! Provides icon extraction, logging and window placement.

pub mod icon_extractor;
pub mod logging;
pub mod window_placement;

pub use icon_extractor::{ICON_SIZE, extract_icon};
pub use logging::init_logging;
pub use window_placement::{SCREEN_MARGIN, centered_on_cursor, cursor_and_screen};
