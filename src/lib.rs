//! Folder Launcher - launch applications, shortcuts and media from a folder
//!
//! Scans a folder for executables, Windows shortcuts and media files and
//! lists them in a small filterable window. Activating a row starts the
//! program or opens the file with its default handler.
//!
//! The library holds everything except the window itself:
//! [`scanner`] finds and classifies files, [`shortcut`] reads `.lnk` files,
//! [`launcher`] starts things and [`session`] keeps the listing state the
//! window renders.

// Module declarations
pub mod config;
pub mod error;
pub mod launcher;
pub mod scanner;
pub mod session;
pub mod shortcut;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{LauncherError, Result};
pub use launcher::{LaunchOutcome, Launcher};
pub use scanner::{FileDescriptor, ScanOptions, ScanReport, scan_folder};
pub use session::{ItemId, Session};
