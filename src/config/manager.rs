//! Style configuration loading
//!
//! Reads `%APPDATA%\FolderLauncher\style.json`. The file is optional and
//! never written by the application: a missing or unreadable file yields the
//! built-in defaults.

use crate::config::models::StyleConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Directory name under `%APPDATA%` holding the style file and logs
pub const APP_DIR_NAME: &str = "FolderLauncher";

/// Style configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the style file and logs
    ///
    /// Returns: %APPDATA%\FolderLauncher (`.\FolderLauncher` when APPDATA is unset)
    pub fn get_app_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    }

    /// Get the path to the style file
    ///
    /// Returns: %APPDATA%\FolderLauncher\style.json
    pub fn get_config_path() -> PathBuf {
        Self::get_app_dir().join("style.json")
    }

    /// Load the style from its default location
    pub fn load() -> Result<StyleConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load the style from `path`
    ///
    /// If the file doesn't exist or is corrupt, returns the default style.
    /// Only a file that exists but cannot be read is an error.
    pub fn load_from(path: &Path) -> Result<StyleConfig> {
        if !path.exists() {
            info!(
                "Style file not found at {}, using defaults",
                path.display()
            );
            return Ok(StyleConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(style) => {
                info!("Style loaded from {}", path.display());
                Ok(style)
            }
            Err(e) => {
                warn!("Failed to parse style file, using defaults: {}", e);
                Ok(StyleConfig::default())
            }
        }
    }
}
