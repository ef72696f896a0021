//! Integration tests for Folder Launcher
//!
//! Scans real temporary folders, resolves synthesized shortcuts and launches
//! the results through a recording backend.

#![allow(clippy::unwrap_used)]

mod common;

use common::{RecordingBackend, Shortcut, touch};
use folder_launcher::{
    LauncherError,
    error::get_user_friendly_error,
    launcher::{LaunchOutcome, Launcher},
    scanner::{Category, FileDescriptor, MediaKind, ScanOptions, scan_folder},
    session::{CategoryFilter, ItemId, Session},
};
use std::path::PathBuf;
use tempfile::TempDir;

fn sorted_paths(descriptors: &[FileDescriptor]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = descriptors.iter().map(|d| d.source_path.clone()).collect();
    paths.sort();
    paths
}

#[test]
fn test_application_starts_process_without_arguments() {
    let dir = TempDir::new().unwrap();
    let exe = touch(dir.path(), "game.exe");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 1);
    let descriptor = &report.descriptors[0];
    assert_eq!(descriptor.category, Category::Application);
    assert_eq!(descriptor.display_name, "game");

    let mut launcher = Launcher::new(RecordingBackend::default());
    let outcome = launcher.launch(descriptor).unwrap();

    assert!(matches!(outcome, LaunchOutcome::Spawned { .. }));
    let backend = launcher.backend();
    assert_eq!(backend.spawned.len(), 1);
    assert_eq!(backend.spawned[0].program, exe);
    assert!(backend.spawned[0].arguments.is_empty());
    assert!(backend.opened.is_empty());
}

#[test]
fn test_media_opens_with_default_handler() {
    let dir = TempDir::new().unwrap();
    let photo = touch(dir.path(), "photo.jpg");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 1);
    assert_eq!(
        report.descriptors[0].category,
        Category::Media(MediaKind::Image)
    );

    let mut launcher = Launcher::new(RecordingBackend::default());
    launcher.launch(&report.descriptors[0]).unwrap();

    assert_eq!(launcher.backend().opened, vec![photo]);
    assert!(launcher.backend().spawned.is_empty());
}

#[test]
fn test_media_deleted_after_scan_is_not_opened() {
    let dir = TempDir::new().unwrap();
    let photo = touch(dir.path(), "photo.jpg");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    std::fs::remove_file(&photo).unwrap();

    let mut launcher = Launcher::new(RecordingBackend::default());
    let err = launcher.launch(&report.descriptors[0]).unwrap_err();

    assert!(matches!(err, LauncherError::TargetMissing(ref p) if *p == photo));
    assert!(launcher.backend().opened.is_empty());
}

#[test]
fn test_shortcut_starts_its_target() {
    let dir = TempDir::new().unwrap();
    Shortcut {
        target: Some(r"C:\Apps\app.exe"),
        description: Some("MyApp"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "app.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 1);
    let descriptor = &report.descriptors[0];
    assert_eq!(descriptor.category, Category::Shortcut);
    assert!(!descriptor.is_store_app());
    let shortcut = descriptor.shortcut.as_ref().unwrap();
    assert_eq!(shortcut.description, "MyApp");
    assert_eq!(
        shortcut.target_path.as_deref(),
        Some(PathBuf::from(r"C:\Apps\app.exe").as_path())
    );

    let backend = RecordingBackend::default().pretend_executable(r"C:\Apps\app.exe");
    let mut launcher = Launcher::new(backend);
    launcher.launch(descriptor).unwrap();

    assert_eq!(launcher.backend().spawned.len(), 1);
    assert_eq!(
        launcher.backend().spawned[0].program,
        PathBuf::from(r"C:\Apps\app.exe")
    );
    assert_eq!(
        launcher
            .registry()
            .get(&PathBuf::from(r"C:\Apps\app.exe"))
            .map(|r| r.count),
        Some(1)
    );
}

#[test]
fn test_store_shortcut_is_refused() {
    let dir = TempDir::new().unwrap();
    Shortcut {
        description: Some("App.Name!12345"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "store.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 1);
    assert!(report.descriptors[0].is_store_app());
    assert_eq!(report.descriptors[0].kind_label(), "store");

    let mut launcher = Launcher::new(RecordingBackend::default());
    let err = launcher.launch(&report.descriptors[0]).unwrap_err();

    assert!(matches!(err, LauncherError::StoreAppUnsupported(_)));
    assert!(launcher.backend().spawned.is_empty());
    assert!(launcher.backend().opened.is_empty());
    assert!(launcher.registry().is_empty());
}

#[test]
fn test_missing_folder_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = scan_folder(&missing, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, LauncherError::FolderNotFound(ref p) if *p == missing));
    assert!(get_user_friendly_error(&err).contains("does-not-exist"));
}

#[test]
fn test_flat_scan_counts_only_launchable_files() {
    let dir = TempDir::new().unwrap();
    for name in ["a.exe", "b.EXE", "c.exe"] {
        touch(dir.path(), name);
    }
    for name in ["d.jpg", "e.PNG", "f.mkv", "g.mov"] {
        touch(dir.path(), name);
    }
    for name in ["notes.txt", "readme", "archive.zip", "song.mp3"] {
        touch(dir.path(), name);
    }
    touch(dir.path(), "nested/deep.exe");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 3 + 4);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_recursive_scan_finds_files_at_every_depth() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "top.exe");
    touch(dir.path(), "one/mid.exe");
    touch(dir.path(), "one/two/low.gif");
    touch(dir.path(), "one/two/three/clip.mp4");
    touch(dir.path(), "one/two/three/ignored.doc");

    let options = ScanOptions {
        recursive: true,
        ..ScanOptions::default()
    };
    let report = scan_folder(dir.path(), &options).unwrap();

    let names: Vec<&str> = report
        .descriptors
        .iter()
        .map(|d| d.display_name.as_str())
        .collect();
    assert_eq!(report.descriptors.len(), 4);
    for expected in ["top", "mid", "low", "clip"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_audio_is_opt_in() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "song.mp3");
    touch(dir.path(), "voice.WAV");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert!(report.is_empty());

    let options = ScanOptions {
        include_audio: true,
        ..ScanOptions::default()
    };
    let report = scan_folder(dir.path(), &options).unwrap();
    assert_eq!(report.descriptors.len(), 2);
    assert!(
        report
            .descriptors
            .iter()
            .all(|d| d.category == Category::Media(MediaKind::Audio))
    );
}

#[test]
fn test_scanning_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "x.exe");
    touch(dir.path(), "y.jpeg");
    Shortcut {
        target: Some(r"C:\Tools\tool.exe"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "tool.lnk");

    let first = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    let second = scan_folder(dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(
        sorted_paths(&first.descriptors),
        sorted_paths(&second.descriptors)
    );
    let mut a = first.descriptors.clone();
    let mut b = second.descriptors.clone();
    a.sort_by(|l, r| l.source_path.cmp(&r.source_path));
    b.sort_by(|l, r| l.source_path.cmp(&r.source_path));
    assert_eq!(a, b);
}

#[test]
fn test_missing_shortcut_target_fails_at_launch() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("gone.exe");
    Shortcut {
        target: Some(gone.to_str().unwrap()),
        description: Some("Gone"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "gone.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.descriptors.len(), 1);
    assert!(report.skipped.is_empty());

    let mut launcher = Launcher::new(RecordingBackend::default());
    let err = launcher.launch(&report.descriptors[0]).unwrap_err();

    assert!(matches!(err, LauncherError::TargetMissing(ref p) if *p == gone));
    assert!(launcher.backend().spawned.is_empty());
}

#[test]
fn test_corrupt_shortcut_is_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.lnk"), b"not a shortcut").unwrap();
    touch(dir.path(), "fine.exe");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(report.descriptors.len(), 1);
    assert_eq!(report.descriptors[0].display_name, "fine");
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].0.ends_with("broken.lnk"));
    assert!(matches!(
        report.skipped[0].1,
        LauncherError::ShortcutResolution { .. }
    ));
}

#[test]
fn test_shortcut_to_document_opens_it() {
    let dir = TempDir::new().unwrap();
    let document = touch(dir.path(), "docs/manual.pdf");
    Shortcut {
        target: Some(document.to_str().unwrap()),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "manual.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    let mut launcher = Launcher::new(RecordingBackend::default());
    let outcome = launcher.launch(&report.descriptors[0]).unwrap();

    assert_eq!(outcome, LaunchOutcome::Opened { path: document });
    assert!(launcher.backend().spawned.is_empty());
}

#[test]
fn test_shortcut_arguments_and_working_directory_are_passed() {
    let dir = TempDir::new().unwrap();
    Shortcut {
        target: Some(r"C:\Editor\edit.exe"),
        arguments: Some("--new \"my file.txt\""),
        working_dir: Some(r"C:\Work"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "editor.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    let backend = RecordingBackend::default().pretend_executable(r"C:\Editor\edit.exe");
    let mut launcher = Launcher::new(backend);
    launcher.launch(&report.descriptors[0]).unwrap();

    let request = &launcher.backend().spawned[0];
    assert_eq!(request.arguments, "--new \"my file.txt\"");
    assert_eq!(request.working_directory, Some(PathBuf::from(r"C:\Work")));
}

#[test]
fn test_session_filters_and_activates_by_id() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Zebra.exe");
    touch(dir.path(), "alpha.exe");
    touch(dir.path(), "beach.jpg");
    Shortcut {
        description: Some("Calc!App"),
        ..Shortcut::default()
    }
    .write_to(dir.path(), "calculator.lnk");

    let report = scan_folder(dir.path(), &ScanOptions::default()).unwrap();
    let mut session = Session::new(report.descriptors);
    assert_eq!(session.len(), 4);

    let names: Vec<&str> = session
        .visible()
        .map(|(_, d)| d.display_name.as_str())
        .collect();
    assert_eq!(names, ["alpha", "beach", "calculator", "Zebra"]);

    session.set_category(CategoryFilter::Apps);
    assert_eq!(session.visible().count(), 3);
    session.set_category(CategoryFilter::Links);
    assert_eq!(session.visible().count(), 0);
    session.set_category(CategoryFilter::All);

    session.set_filter("  ZEB ");
    let first = session.first_visible().unwrap();
    let mut launcher = Launcher::new(RecordingBackend::default());
    session.activate(first, &mut launcher).unwrap();
    assert!(launcher.backend().spawned[0].program.ends_with("Zebra.exe"));

    let err = session.activate(ItemId(99), &mut launcher).unwrap_err();
    assert!(matches!(err, LauncherError::UnknownItem(99)));
}
