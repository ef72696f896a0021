//! Style configuration data models
//!
//! Mirrors the layout of `style.json`. Every section and key is optional;
//! anything missing takes its default. Colours stay as strings here and are
//! validated when the style is resolved against the system theme.

use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};

/// Window title used when the style file does not set one
pub const DEFAULT_TITLE: &str = "Folder Launcher";

/// Top-level style configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Window-wide colours, font and title
    pub general: GeneralStyle,
    /// Item list appearance
    pub list_view: ListViewStyle,
    /// Column header appearance
    pub header: HeaderStyle,
    /// Category sidebar appearance
    pub sidebar: SidebarStyle,
    /// Spacing
    pub layout: LayoutStyle,
    /// Window size and placement
    pub window: WindowStyle,
    /// What the folder scan picks up
    pub scan: ScanOptions,
}

/// `general` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralStyle {
    /// Window title
    pub title: String,
    /// Window background
    pub background_color: Option<String>,
    /// Sidebar background
    pub sidebar_color: Option<String>,
    /// Button background
    pub button_color: Option<String>,
    /// Button background under the pointer
    pub button_hover_color: Option<String>,
    /// Button background while pressed
    pub button_pressed_color: Option<String>,
    /// Text colour
    pub text_color: Option<String>,
    /// Base font size in points
    pub font_size: u32,
    /// Button corner radius in pixels
    pub button_radius: u32,
}

impl Default for GeneralStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            background_color: None,
            sidebar_color: None,
            button_color: None,
            button_hover_color: None,
            button_pressed_color: None,
            text_color: None,
            font_size: 12,
            button_radius: 6,
        }
    }
}

/// `list_view` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewStyle {
    /// List background
    pub background_color: Option<String>,
    /// Row text colour
    pub foreground_color: Option<String>,
    /// Highlight of the row under the pointer
    pub selected_color: Option<String>,
    /// List border
    pub border_color: Option<String>,
    /// Row height in pixels
    pub row_height: u32,
    /// Row font size in points
    pub font_size: u32,
}

impl Default for ListViewStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: None,
            selected_color: None,
            border_color: None,
            row_height: 32,
            font_size: 11,
        }
    }
}

/// `header` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    /// Header background
    pub background_color: Option<String>,
}

/// `sidebar` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarStyle {
    /// Sidebar button font size in points
    pub font_size: u32,
    /// Sidebar width in pixels
    pub width: u32,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            font_size: 12,
            width: 110,
        }
    }
}

/// `layout` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    /// Padding around and between panels in pixels
    pub padding: u32,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self { padding: 10 }
    }
}

/// `window` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowStyle {
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Open the window centred on the mouse pointer
    pub follow_cursor: bool,
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self {
            width: 400,
            height: 500,
            follow_cursor: true,
        }
    }
}
