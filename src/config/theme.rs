//! System theme detection and style resolution
//!
//! The window follows the system light/dark setting; colours set in the
//! style file override single palette entries.

use crate::config::models::StyleConfig;
use std::fmt;
use tracing::{debug, warn};

/// System colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

/// Read the "apps use light theme" setting.
///
/// Falls back to [`ThemeMode::Light`] when the value cannot be read.
#[cfg(windows)]
pub fn detect_system_theme() -> ThemeMode {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    const PERSONALIZE_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let value: std::io::Result<u32> = hkcu
        .open_subkey(PERSONALIZE_KEY)
        .and_then(|key| key.get_value("AppsUseLightTheme"));

    match value {
        Ok(0) => ThemeMode::Dark,
        Ok(_) => ThemeMode::Light,
        Err(e) => {
            debug!("Could not read theme setting, assuming light: {}", e);
            ThemeMode::Light
        }
    }
}

/// Read the system colour scheme (always light outside Windows)
#[cfg(not(windows))]
pub fn detect_system_theme() -> ThemeMode {
    ThemeMode::Light
}

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` value
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to 8 bits before the cast"
    )]
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` or `#RGB`
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Self::from_hex),
            3 => {
                let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
                let mut channel = || digits.next().and_then(|d| u8::try_from(d * 17).ok());
                Some(Self {
                    r: channel()?,
                    g: channel()?,
                    b: channel()?,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Complete set of colours used by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background
    pub background: Rgb,
    /// Sidebar background
    pub sidebar: Rgb,
    /// Button background
    pub button: Rgb,
    /// Button under the pointer
    pub button_hover: Rgb,
    /// Button while pressed
    pub button_pressed: Rgb,
    /// General text
    pub text: Rgb,
    /// List background
    pub list_background: Rgb,
    /// Row text
    pub list_foreground: Rgb,
    /// Row under the pointer
    pub selected: Rgb,
    /// List border
    pub border: Rgb,
    /// Column header background
    pub header_background: Rgb,
}

impl Palette {
    /// Light system palette
    pub const LIGHT: Self = Self {
        background: Rgb::from_hex(0xFF_FFFF),
        sidebar: Rgb::from_hex(0xF3_F3F3),
        button: Rgb::from_hex(0xE0_E0E0),
        button_hover: Rgb::from_hex(0xD3_D3D3),
        button_pressed: Rgb::from_hex(0xB0_B0B0),
        text: Rgb::from_hex(0x00_0000),
        list_background: Rgb::from_hex(0xFF_FFFF),
        list_foreground: Rgb::from_hex(0x00_0000),
        selected: Rgb::from_hex(0xCC_E4F7),
        border: Rgb::from_hex(0xC8_C8C8),
        header_background: Rgb::from_hex(0xED_EDED),
    };

    /// Dark system palette
    pub const DARK: Self = Self {
        background: Rgb::from_hex(0x2C_2F38),
        sidebar: Rgb::from_hex(0x25_2830),
        button: Rgb::from_hex(0x3D_4758),
        button_hover: Rgb::from_hex(0x4D_596E),
        button_pressed: Rgb::from_hex(0x2C_3340),
        text: Rgb::from_hex(0xFF_FFFF),
        list_background: Rgb::from_hex(0x2C_2F38),
        list_foreground: Rgb::from_hex(0xFF_FFFF),
        selected: Rgb::from_hex(0x3A_5A80),
        border: Rgb::from_hex(0x44_495A),
        header_background: Rgb::from_hex(0x34_3844),
    };

    /// Palette for a system theme
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }
}

/// Style with every value decided, ready to hand to the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Window title
    pub title: String,
    /// Colours
    pub palette: Palette,
    /// Base font size
    pub font_size: u32,
    /// Button corner radius
    pub button_radius: u32,
    /// Row height
    pub row_height: u32,
    /// Row font size
    pub list_font_size: u32,
    /// Sidebar font size
    pub sidebar_font_size: u32,
    /// Sidebar width
    pub sidebar_width: u32,
    /// Panel padding
    pub padding: u32,
    /// Initial window width
    pub window_width: u32,
    /// Initial window height
    pub window_height: u32,
    /// Centre the window on the pointer at startup
    pub follow_cursor: bool,
}

impl StyleConfig {
    /// Fill in everything the style file left open from the palette of `mode`.
    ///
    /// Invalid colour strings are logged and replaced by the palette colour.
    pub fn resolve(&self, mode: ThemeMode) -> ResolvedStyle {
        let base = Palette::for_mode(mode);
        let general = &self.general;
        let list = &self.list_view;

        let palette = Palette {
            background: pick(
                "general.background_color",
                general.background_color.as_deref(),
                base.background,
            ),
            sidebar: pick("general.sidebar_color", general.sidebar_color.as_deref(), base.sidebar),
            button: pick("general.button_color", general.button_color.as_deref(), base.button),
            button_hover: pick(
                "general.button_hover_color",
                general.button_hover_color.as_deref(),
                base.button_hover,
            ),
            button_pressed: pick(
                "general.button_pressed_color",
                general.button_pressed_color.as_deref(),
                base.button_pressed,
            ),
            text: pick("general.text_color", general.text_color.as_deref(), base.text),
            list_background: pick(
                "list_view.background_color",
                list.background_color.as_deref(),
                base.list_background,
            ),
            list_foreground: pick(
                "list_view.foreground_color",
                list.foreground_color.as_deref(),
                base.list_foreground,
            ),
            selected: pick(
                "list_view.selected_color",
                list.selected_color.as_deref(),
                base.selected,
            ),
            border: pick("list_view.border_color", list.border_color.as_deref(), base.border),
            header_background: pick(
                "header.background_color",
                self.header.background_color.as_deref(),
                base.header_background,
            ),
        };

        ResolvedStyle {
            title: general.title.clone(),
            palette,
            font_size: general.font_size,
            button_radius: general.button_radius,
            row_height: list.row_height,
            list_font_size: list.font_size,
            sidebar_font_size: self.sidebar.font_size,
            sidebar_width: self.sidebar.width,
            padding: self.layout.padding,
            window_width: self.window.width,
            window_height: self.window.height,
            follow_cursor: self.window.follow_cursor,
        }
    }
}

fn pick(key: &str, configured: Option<&str>, fallback: Rgb) -> Rgb {
    let Some(text) = configured else {
        return fallback;
    };
    Rgb::parse(text).unwrap_or_else(|| {
        warn!("Invalid colour {:?} for {}, using {}", text, key, fallback);
        fallback
    })
}
