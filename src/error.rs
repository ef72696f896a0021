//! Error types for Folder Launcher
//!
//! Folder-level failures abort a scan; everything else is scoped to a single
//! item so one broken shortcut never takes the window down with it.

use crate::shortcut::LnkError;
use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for Folder Launcher
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The folder to scan does not exist or is not a directory
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// A shortcut file could not be parsed
    #[error("Failed to resolve shortcut {}: {source}", path.display())]
    ShortcutResolution {
        /// Path of the `.lnk` file
        path: PathBuf,
        /// Parser failure
        #[source]
        source: LnkError,
    },

    /// A shortcut parsed correctly but carries no usable target
    #[error("Shortcut has no target: {}", .0.display())]
    ShortcutUnresolved(PathBuf),

    /// The file to launch is no longer on disk
    #[error("Target not found: {}", .0.display())]
    TargetMissing(PathBuf),

    /// The operating system refused to start the process or handler
    #[error("Failed to launch {}: {source}", target.display())]
    LaunchFailed {
        /// What we tried to start or open
        target: PathBuf,
        /// OS error
        #[source]
        source: std::io::Error,
    },

    /// Store app shortcuts are not launched by this tool
    #[error("Store app shortcut cannot be launched here: {0}")]
    StoreAppUnsupported(String),

    /// Activation referenced an item that is not part of the current listing
    #[error("Unknown item id: {0}")]
    UnknownItem(usize),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Windows API error
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] windows::core::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Icon extraction failed
    #[error("Icon extraction failed: {0}")]
    IconExtractionError(String),
}

impl LauncherError {
    /// Whether the error only concerns one item (the rest of the listing stays usable)
    pub fn is_per_item(&self) -> bool {
        !matches!(
            self,
            Self::FolderNotFound(_) | Self::ConfigError(_) | Self::JsonError(_)
        )
    }
}

/// Result type alias for Folder Launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Convert an error to a user-friendly message
///
/// Returns text suitable for an error dialog, with a hint about what the
/// user can do next.
pub fn get_user_friendly_error(error: &LauncherError) -> String {
    match error {
        LauncherError::FolderNotFound(path) => format!(
            "The folder could not be opened:\n{}\n\n\
             Check that the path exists and that it is a folder.",
            path.display()
        ),
        LauncherError::ShortcutResolution { path, source } => format!(
            "The shortcut could not be read:\n{}\n\n{source}\n\n\
             The file may be corrupted or use an unsupported format.",
            path.display()
        ),
        LauncherError::ShortcutUnresolved(path) => format!(
            "The shortcut does not point to a file:\n{}\n\n\
             Recreate the shortcut and try again.",
            path.display()
        ),
        LauncherError::TargetMissing(path) => format!(
            "The file this item points to no longer exists:\n{}\n\n\
             It may have been moved or uninstalled.",
            path.display()
        ),
        LauncherError::LaunchFailed { target, source } => format!(
            "Windows could not start:\n{}\n\n{source}\n\n\
             Check that you have permission to run it.",
            target.display()
        ),
        LauncherError::StoreAppUnsupported(name) => format!(
            "\"{name}\" is a Microsoft Store app shortcut.\n\n\
             Store apps cannot be started from this launcher.\n\
             Open it from the Start menu instead."
        ),
        LauncherError::UnknownItem(_) => "The selected item is no longer available.\n\n\
             Refresh the list and try again."
            .to_string(),
        LauncherError::ConfigError(_) => "Failed to load the style configuration.\n\n\
             Built-in defaults will be used.\n\
             Check the file in:\n\
             %APPDATA%\\FolderLauncher"
            .to_string(),
        #[cfg(windows)]
        LauncherError::WindowsApiError(e) => {
            format!(
                "A Windows API error occurred:\n\n{e}\n\n\
                 Please ensure your Windows installation is up to date."
            )
        }
        LauncherError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions."
            )
        }
        LauncherError::JsonError(e) => {
            format!(
                "The style configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
        LauncherError::IconExtractionError(path) => {
            format!(
                "Failed to extract icon from: {path}\n\n\
                 The item is shown without an icon.\n\
                 This does not affect launching."
            )
        }
    }
}
