//! OS-facing side of launching
//!
//! [`LaunchBackend`] is the seam between the launch rules and the operating
//! system: production code uses [`SystemBackend`], tests substitute a
//! recording implementation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// A process to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Executable to run
    pub program: PathBuf,
    /// Command line arguments as a single string, as stored in shortcuts
    pub arguments: String,
    /// Working directory, inherited when `None`
    pub working_directory: Option<PathBuf>,
}

impl SpawnRequest {
    /// Start `program` with no arguments in the inherited working directory
    pub fn bare(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            arguments: String::new(),
            working_directory: None,
        }
    }
}

/// Operations the launcher needs from the operating system
pub trait LaunchBackend {
    /// Start a detached process; returns its PID when the OS reports one
    fn spawn(&mut self, request: &SpawnRequest) -> std::io::Result<Option<u32>>;

    /// Open a file or folder with its default handler
    fn open_default(&mut self, path: &Path) -> std::io::Result<()>;

    /// Whether `path` exists
    fn target_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Whether `path` is a directory
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Whether `path` can be started as a process
    fn is_executable(&self, path: &Path) -> bool {
        is_executable_file(path)
    }
}

/// Backend that talks to the real operating system
///
/// Spawned processes are not tracked. On Unix each child is waited on by its
/// own background thread so that it does not linger as a zombie
/// after it exits; on Windows the process handle is simply closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackend;

impl LaunchBackend for SystemBackend {
    fn spawn(&mut self, request: &SpawnRequest) -> std::io::Result<Option<u32>> {
        let mut cmd = Command::new(&request.program);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            use windows::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS};

            // Shortcut arguments are already a Windows command line; pass them through untouched
            if !request.arguments.is_empty() {
                cmd.raw_arg(&request.arguments);
            }
            cmd.creation_flags(DETACHED_PROCESS.0 | CREATE_NEW_PROCESS_GROUP.0);
        }

        #[cfg(not(windows))]
        {
            cmd.args(split_arguments(&request.arguments));
        }

        if let Some(dir) = &request.working_directory {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn()?;
        let pid = child.id();
        debug!("Spawned {} (pid {})", request.program.display(), pid);

        #[cfg(unix)]
        reap_in_background(child);

        Ok(Some(pid))
    }

    fn open_default(&mut self, path: &Path) -> std::io::Result<()> {
        open::that_detached(path)
    }
}

/// Wait for `child` on a detached thread so its exit status is collected
#[cfg(unix)]
fn reap_in_background(mut child: std::process::Child) {
    let pid = child.id();
    let waiter = std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!("Process {} exited with {}", pid, status),
            Err(e) => tracing::warn!("Failed to wait for process {}: {}", pid, e),
        });
    if let Err(e) = waiter {
        tracing::warn!("Could not start waiter for process {}: {}", pid, e);
    }
}

/// Whether a file can be started directly as a process
#[cfg(windows)]
pub fn is_executable_file(path: &Path) -> bool {
    const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "com", "bat", "cmd"];

    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                EXECUTABLE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
}

/// Whether a file can be started directly as a process
#[cfg(unix)]
pub fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

/// Whether a file can be started directly as a process
#[cfg(not(any(windows, unix)))]
pub fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

/// Split a Windows-style command line into arguments.
///
/// Whitespace separates arguments, double quotes group them and `\"` is a
/// literal quote. Used where the OS expects an argument vector.
pub fn split_arguments(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
                has_token = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }
    args
}
