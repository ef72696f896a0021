//! Folder Launcher - launch applications, shortcuts and media from a folder
//!
//! Usage: `folder-launcher <FOLDER>`. Scans the folder, shows its launchable
//! files in a small window near the mouse pointer and starts whatever is
//! clicked.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use clap::Parser;
use folder_launcher::{
    config::{ConfigManager, StyleConfig, detect_system_theme},
    error::get_user_friendly_error,
    scanner::{ScanOptions, ScanReport, scan_folder},
    utils,
};
use gui::GuiController;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Launch applications, shortcuts and media files from a folder
#[derive(Debug, Parser)]
#[command(name = "folder-launcher", about)]
struct Args {
    /// Folder containing the shortcuts, executables and media files to list
    folder: PathBuf,
}

/// Main entry point for the application
///
/// Loads the style, scans the folder and runs the launcher window.
fn main() -> Result<()> {
    let args = Args::parse();

    utils::init_logging().context("Failed to initialize logging system")?;
    info!("Scanning {}", args.folder.display());

    let style = ConfigManager::load().unwrap_or_else(|e| {
        warn!("Failed to read style file, using defaults: {}", e);
        StyleConfig::default()
    });
    let theme = detect_system_theme();
    info!("System theme: {:?}", theme);
    let resolved = style.resolve(theme);

    let Some(report) = startup_scan(&args.folder, &style.scan) else {
        return Ok(());
    };

    info!("Creating GUI controller");
    let gui_controller = GuiController::new(args.folder, style.scan, report, &resolved)
        .context("Failed to create GUI controller")?;

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Folder Launcher shutting down");

    Ok(())
}

/// Scan the folder given on the command line.
///
/// A failed or empty scan is reported in a dialog and yields `None`; the
/// program then ends normally.
fn startup_scan(folder: &Path, options: &ScanOptions) -> Option<ScanReport> {
    match startup_scan_message(folder, scan_folder(folder, options)) {
        Ok(report) => Some(report),
        Err(message) => {
            show_error(&message);
            None
        }
    }
}

/// Dialog text for a scan result that leaves nothing to show
fn startup_scan_message(
    folder: &Path,
    scanned: folder_launcher::Result<ScanReport>,
) -> Result<ScanReport, String> {
    match scanned {
        Ok(report) if report.is_empty() => {
            info!("No launchable files found in {}", folder.display());
            Err(format!("No launchable files found in:\n{}", folder.display()))
        }
        Ok(report) => Ok(report),
        Err(e) => {
            error!("Scan failed: {}", e);
            Err(get_user_friendly_error(&e))
        }
    }
}

/// Shows an error dialog.
#[cfg(windows)]
fn show_error(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Folder Launcher - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();
}

/// Shows an error message (non-Windows fallback).
#[cfg(not(windows))]
fn show_error(message: &str) {
    eprintln!("ERROR: {message}");
}
