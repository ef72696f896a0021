//! Folder scanning
//!
//! Finds launchable files in a folder and classifies them by extension.

pub mod classifier;
pub mod folder_scanner;

pub use classifier::{Category, MediaKind, ScanOptions, classify, classify_extension};
pub use folder_scanner::{FileDescriptor, ScanReport, scan_folder};
