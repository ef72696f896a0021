//! Reading `.lnk` files
//!
//! Decoding is done by the [`lnk`] crate; this module narrows its output to
//! the fields that matter for launching. ANSI strings are decoded as
//! Windows-1252, the code page shortcuts are written in on western systems.

use lnk::encoding::WINDOWS_1252;
use std::path::Path;
use thiserror::Error;

/// Shortcut files larger than this are rejected without parsing
pub const MAX_LINK_FILE_SIZE: u64 = 1024 * 1024;

/// Errors produced while reading a shortcut
#[derive(Debug, Error)]
pub enum LnkError {
    /// File is too large to be a shortcut
    #[error("file is {0} bytes, larger than any shortcut")]
    TooLarge(u64),

    /// The shell link structure could not be decoded
    #[error("malformed shell link: {0}")]
    Malformed(String),

    /// Reading the file failed
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Launch-relevant fields of a shortcut, as stored (nothing expanded)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkData {
    /// `NAME_STRING`, shown as the shortcut's description/comment
    pub name: Option<String>,
    /// `RELATIVE_PATH`
    pub relative_path: Option<String>,
    /// `WORKING_DIR`
    pub working_dir: Option<String>,
    /// `COMMAND_LINE_ARGUMENTS`
    pub arguments: Option<String>,
    /// `ICON_LOCATION`
    pub icon_location: Option<String>,
    /// Index of the icon inside `icon_location`
    pub icon_index: i32,
    /// `LinkInfo` local base path joined with the common suffix
    pub local_target: Option<String>,
    /// `LinkInfo` network share joined with the common suffix
    pub network_target: Option<String>,
    /// Target from the environment-variable data block
    pub environment_target: Option<String>,
}

impl LinkData {
    /// Read and decode the shortcut at `path`
    pub fn read(path: &Path) -> Result<Self, LnkError> {
        let size = std::fs::metadata(path)?.len();
        if size > MAX_LINK_FILE_SIZE {
            return Err(LnkError::TooLarge(size));
        }

        let link = lnk::ShellLink::open(path, WINDOWS_1252)
            .map_err(|e| LnkError::Malformed(format!("{e:?}")))?;
        Ok(Self::from(&link))
    }
}

impl From<&lnk::ShellLink> for LinkData {
    fn from(link: &lnk::ShellLink) -> Self {
        let strings = link.string_data();

        let (local_target, network_target) = match link.link_info() {
            Some(info) => {
                let suffix = info
                    .common_path_suffix_unicode()
                    .text()
                    .or_else(|| info.common_path_suffix().text());
                let local = info
                    .local_base_path_unicode()
                    .text()
                    .or_else(|| info.local_base_path().text())
                    .map(|base| join_windows(base, suffix));
                let network = info
                    .common_network_relative_link()
                    .as_ref()
                    .and_then(|network| network.net_name().text().map(str::to_string))
                    .map(|share| join_windows(&share, suffix));
                (local, network)
            }
            None => (None, None),
        };

        let environment_target = link
            .extra_data()
            .blocks()
            .iter()
            .find_map(|block| match block {
                lnk::extradata::ExtraDataBlock::EnvironmentProps(block) => Some(block),
                _ => None,
            })
            .and_then(|block| {
                block
                    .target_unicode()
                    .text()
                    .or_else(|| block.target_ansi().text())
                    .map(str::to_string)
            });

        Self {
            name: strings.name_string().text().map(str::to_string),
            relative_path: strings.relative_path().text().map(str::to_string),
            working_dir: strings.working_dir().text().map(str::to_string),
            arguments: strings.command_line_arguments().text().map(str::to_string),
            icon_location: strings.icon_location().text().map(str::to_string),
            icon_index: link.header().icon_index().to_owned(),
            local_target,
            network_target,
            environment_target,
        }
    }
}

/// Non-empty text of a decoded string field, without NUL padding
trait TextField {
    fn text(&self) -> Option<&str>;
}

impl TextField for String {
    fn text(&self) -> Option<&str> {
        Some(self.trim_end_matches('\0')).filter(|s| !s.is_empty())
    }
}

impl TextField for str {
    fn text(&self) -> Option<&str> {
        Some(self.trim_end_matches('\0')).filter(|s| !s.is_empty())
    }
}

impl TextField for Option<&str> {
    fn text(&self) -> Option<&str> {
        self.and_then(TextField::text)
    }
}

impl TextField for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(TextField::text)
    }
}

fn join_windows(base: &str, suffix: Option<&str>) -> String {
    match suffix {
        None => base.to_string(),
        Some(suffix) if base.ends_with('\\') => format!("{base}{suffix}"),
        Some(suffix) => format!("{base}\\{suffix}"),
    }
}
