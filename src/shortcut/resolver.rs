//! Shortcut resolution
//!
//! Turns decoded [`LinkData`] into the launch-relevant [`ShortcutInfo`]:
//! picks the best target path, expands `%VAR%` references and flags Store
//! app shortcuts.

use crate::error::{LauncherError, Result};
use crate::shortcut::link_data::{LinkData, LnkError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker that Store app shortcuts carry in their description
/// (`Microsoft.WindowsCalculator_8wekyb3d8bbwe!App`).
const STORE_APP_SENTINEL: char = '!';

/// Icon reference stored in a shortcut
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconLocation {
    /// File holding the icon (`.exe`, `.dll` or `.ico`)
    pub path: PathBuf,
    /// Icon index inside the file; negative values are resource ids
    pub index: i32,
}

/// Launch-relevant contents of a resolved shortcut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutInfo {
    /// Target the shortcut points to, `None` when nothing usable was stored
    pub target_path: Option<PathBuf>,
    /// Command line arguments passed to the target
    pub arguments: String,
    /// Working directory for the target, empty when unset
    pub working_directory: String,
    /// Free-text description (comment) of the shortcut
    pub description: String,
    /// Icon to display for the shortcut
    pub icon_location: Option<IconLocation>,
    /// Whether this shortcut points at a Store app (never launched)
    pub is_store_app: bool,
}

impl ShortcutInfo {
    /// Build launch info from decoded link fields.
    ///
    /// `link_path` is the location of the `.lnk` file itself; relative targets
    /// are resolved against its directory. `lookup` supplies environment
    /// variables for `%VAR%` expansion.
    pub fn from_link(
        link: &LinkData,
        link_path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let target_path = select_target(link, link_path, &lookup);
        let description = link.name.clone().unwrap_or_default();
        let icon_location = link
            .icon_location
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| IconLocation {
                path: PathBuf::from(expand_environment(s, &lookup)),
                index: link.icon_index,
            });

        Self {
            target_path,
            arguments: link.arguments.clone().unwrap_or_default(),
            working_directory: link
                .working_dir
                .as_deref()
                .map(|s| expand_environment(s, &lookup))
                .unwrap_or_default(),
            is_store_app: is_store_shortcut(&description),
            description,
            icon_location,
        }
    }
}

/// Read and resolve the shortcut at `path`.
///
/// Oversized, unreadable or malformed files are reported as
/// [`LauncherError::ShortcutResolution`]. A shortcut without a usable target
/// is not an error here: it resolves with `target_path: None`.
pub fn resolve_shortcut(path: &Path) -> Result<ShortcutInfo> {
    let link = LinkData::read(path).map_err(|source| LauncherError::ShortcutResolution {
        path: path.to_path_buf(),
        source,
    })?;
    let info = ShortcutInfo::from_link(&link, path, |name| std::env::var(name).ok());

    debug!(
        "Resolved shortcut {}: target={:?}, store_app={}",
        path.display(),
        info.target_path,
        info.is_store_app
    );

    Ok(info)
}

/// Whether a shortcut description identifies a Store app.
///
/// Store app shortcuts store the application user model id
/// (`PackageFamilyName!AppId`) where a normal shortcut stores its comment, so
/// a `!` is taken as the marker. Ordinary comments that contain `!` are
/// misclassified.
pub fn is_store_shortcut(description: &str) -> bool {
    description.contains(STORE_APP_SENTINEL)
}

/// Expand `%NAME%` references using `lookup`.
///
/// Unknown variables and unterminated `%` sequences are left as written.
pub fn expand_environment(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(len) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..len];
        match (!name.is_empty()).then(|| lookup(name)).flatten() {
            Some(expanded) => {
                out.push_str(&expanded);
                rest = &after[len + 1..];
            }
            None => {
                // Keep the leading `%` and rescan from the closing one, which
                // may open the next reference
                out.push('%');
                out.push_str(name);
                rest = &after[len..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn select_target(
    link: &LinkData,
    link_path: &Path,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    let absolute = [
        &link.environment_target,
        &link.local_target,
        &link.network_target,
    ]
    .into_iter()
    .find_map(|s| s.as_deref().filter(|s| !s.trim().is_empty()));

    if let Some(target) = absolute {
        return Some(PathBuf::from(expand_environment(target, lookup)));
    }

    let relative = link.relative_path.as_deref().filter(|s| !s.trim().is_empty())?;
    let relative = native_separators(&expand_environment(relative, lookup));
    let base = link_path.parent().unwrap_or_else(|| Path::new(""));
    Some(base.join(relative))
}

/// Shortcuts always use `\`; elsewhere the relative part is rewritten so it
/// joins onto a native path.
fn native_separators(path: &str) -> String {
    if cfg!(windows) {
        path.to_string()
    } else {
        path.replace('\\', "/")
    }
}
