//! Shared helpers for integration tests
//!
//! Re-exports the shortcut writer and provides a launch backend that records
//! what it was asked to do instead of touching the system.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use folder_launcher::launcher::{LaunchBackend, SpawnRequest, is_executable_file};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod shortcut_fixture;

pub use shortcut_fixture::Shortcut;

/// Create an empty file (and its parent directories) inside `dir`
pub fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"").unwrap();
    path
}

/// Backend that records requests. Paths registered with `pretend_executable`
/// exist and are executable regardless of the real filesystem.
#[derive(Default)]
pub struct RecordingBackend {
    pretend: HashSet<PathBuf>,
    pub spawned: Vec<SpawnRequest>,
    pub opened: Vec<PathBuf>,
}

impl RecordingBackend {
    pub fn pretend_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.pretend.insert(path.into());
        self
    }
}

impl LaunchBackend for RecordingBackend {
    fn spawn(&mut self, request: &SpawnRequest) -> std::io::Result<Option<u32>> {
        self.spawned.push(request.clone());
        Ok(Some(4242))
    }

    fn open_default(&mut self, path: &Path) -> std::io::Result<()> {
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn target_exists(&self, path: &Path) -> bool {
        self.pretend.contains(path) || path.exists()
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.pretend.contains(path) || is_executable_file(path)
    }
}
