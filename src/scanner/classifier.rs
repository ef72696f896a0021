//! Extension-based file classification
//!
//! Classification looks at the extension only; file contents are never read.

use serde::{Deserialize, Serialize};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];
const APPLICATION_EXTENSION: &str = "exe";
const SHORTCUT_EXTENSION: &str = "lnk";

/// Kind of media file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Audio track
    Audio,
}

/// How a file is presented and launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Executable, started directly
    Application,
    /// Opened with the default handler
    Media(MediaKind),
    /// Windows shortcut, resolved before launching
    Shortcut,
}

impl Category {
    /// Short type tag shown in front of the item name
    pub fn label(self) -> &'static str {
        match self {
            Self::Application => "app",
            Self::Media(MediaKind::Image) => "image",
            Self::Media(MediaKind::Video) => "video",
            Self::Media(MediaKind::Audio) => "audio",
            Self::Shortcut => "link",
        }
    }
}

/// Options that change which files are picked up and how
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Also list `.mp3` and `.wav` files
    pub include_audio: bool,
    /// Treat `.lnk` files as plain applications instead of resolving them
    pub shortcuts_as_applications: bool,
}

/// Classify a path by its extension (case-insensitive).
///
/// Returns `None` for files that should not be listed.
pub fn classify(path: &Path, options: &ScanOptions) -> Option<Category> {
    let extension = path.extension()?.to_str()?;
    classify_extension(extension, options)
}

/// Classify a bare extension without the leading dot
pub fn classify_extension(extension: &str, options: &ScanOptions) -> Option<Category> {
    let extension = extension.to_ascii_lowercase();
    let extension = extension.as_str();

    if extension == APPLICATION_EXTENSION {
        return Some(Category::Application);
    }
    if extension == SHORTCUT_EXTENSION {
        return Some(if options.shortcuts_as_applications {
            Category::Application
        } else {
            Category::Shortcut
        });
    }
    if IMAGE_EXTENSIONS.contains(&extension) {
        return Some(Category::Media(MediaKind::Image));
    }
    if VIDEO_EXTENSIONS.contains(&extension) {
        return Some(Category::Media(MediaKind::Video));
    }
    if options.include_audio && AUDIO_EXTENSIONS.contains(&extension) {
        return Some(Category::Media(MediaKind::Audio));
    }

    None
}
