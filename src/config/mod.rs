//! Style configuration module
//!
//! This module handles loading the optional style file and resolving it
//! against the system light/dark theme. The style is stored in
//! %APPDATA%\FolderLauncher\style.json and is only ever read.

pub mod manager;
pub mod models;
pub mod theme;

pub use manager::ConfigManager;
pub use models::{
    GeneralStyle, HeaderStyle, LayoutStyle, ListViewStyle, SidebarStyle, StyleConfig, WindowStyle,
};
pub use theme::{Palette, ResolvedStyle, Rgb, ThemeMode, detect_system_theme};
