//! Folder traversal
//!
//! Walks a folder (flat or recursive), classifies every file and resolves
//! shortcuts. Per-file problems never abort the scan: unreadable files are
//! skipped quietly, broken shortcuts are reported in [`ScanReport::skipped`].

use crate::error::{LauncherError, Result};
use crate::scanner::classifier::{Category, ScanOptions, classify};
use crate::shortcut::{IconLocation, ShortcutInfo, resolve_shortcut};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// One launchable file found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Category decided from the extension at scan time
    pub category: Category,
    /// File name without extension
    pub display_name: String,
    /// Path of the file on disk
    pub source_path: PathBuf,
    /// Resolved shortcut contents, only for [`Category::Shortcut`]
    pub shortcut: Option<ShortcutInfo>,
}

impl FileDescriptor {
    /// Whether this is a shortcut to a Store app
    pub fn is_store_app(&self) -> bool {
        self.shortcut.as_ref().is_some_and(|s| s.is_store_app)
    }

    /// Type tag for display: the category label, or `store` for Store app shortcuts
    pub fn kind_label(&self) -> &'static str {
        if self.is_store_app() {
            "store"
        } else {
            self.category.label()
        }
    }

    /// Where to take the row icon from
    ///
    /// Shortcuts prefer their own icon location, then their target. Everything
    /// else uses the file itself.
    pub fn icon_source(&self) -> IconLocation {
        let from_shortcut = self.shortcut.as_ref().and_then(|s| {
            s.icon_location.clone().or_else(|| {
                s.target_path.as_ref().map(|target| IconLocation {
                    path: target.clone(),
                    index: 0,
                })
            })
        });

        from_shortcut.unwrap_or_else(|| IconLocation {
            path: self.source_path.clone(),
            index: 0,
        })
    }
}

/// Result of scanning a folder
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Launchable files in enumeration order
    pub descriptors: Vec<FileDescriptor>,
    /// Shortcuts that could not be resolved, with the reason
    pub skipped: Vec<(PathBuf, LauncherError)>,
}

impl ScanReport {
    /// Whether nothing launchable was found
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Scan `root` for launchable files.
///
/// Fails only when `root` is missing or not a directory. Ordering follows the
/// filesystem; callers that need a stable order sort the result.
pub fn scan_folder(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(LauncherError::FolderNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).min_depth(1);
    let walker = if options.recursive {
        walker
    } else {
        walker.max_depth(1)
    };

    let mut report = ScanReport::default();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Some(category) = classify(path, options) else {
            continue;
        };

        if let Err(e) = check_readable(path) {
            debug!("Skipping unreadable file {}: {}", path.display(), e);
            continue;
        }

        let shortcut = if category == Category::Shortcut {
            match resolve_shortcut(path) {
                Ok(info) => Some(info),
                Err(e) => {
                    warn!("Skipping shortcut {}: {}", path.display(), e);
                    report.skipped.push((path.to_path_buf(), e));
                    continue;
                }
            }
        } else {
            None
        };

        report.descriptors.push(FileDescriptor {
            category,
            display_name: display_name(path),
            source_path: path.to_path_buf(),
            shortcut,
        });
    }

    info!(
        "Scanned {}: {} items, {} skipped shortcuts",
        root.display(),
        report.descriptors.len(),
        report.skipped.len()
    );

    Ok(report)
}

/// The entry must be a regular file (after following links) that can be opened
fn check_readable(path: &Path) -> std::io::Result<()> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(std::io::Error::other("not a regular file"));
    }
    File::open(path).map(drop)
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
