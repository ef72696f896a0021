//! Windows shortcut (`.lnk`) support
//!
//! [`link_data`] reads a shortcut file through the `lnk` crate; [`resolver`]
//! turns the decoded fields into something the launcher can act on and
//! decides whether the shortcut belongs to a Store app.

pub mod link_data;
pub mod resolver;

pub use link_data::{LinkData, LnkError, MAX_LINK_FILE_SIZE};
pub use resolver::{
    IconLocation, ShortcutInfo, expand_environment, is_store_shortcut, resolve_shortcut,
};
