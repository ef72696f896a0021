//! Launch rules
//!
//! Decides, per descriptor, whether to start a process or hand the file to
//! its default handler, and refuses what must not be launched.

use crate::error::{LauncherError, Result};
use crate::launcher::backend::{LaunchBackend, SpawnRequest, SystemBackend};
use crate::launcher::registry::LaunchRegistry;
use crate::scanner::{Category, FileDescriptor};
use crate::shortcut::ShortcutInfo;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// What a successful launch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A process was started
    Spawned {
        /// Program that was started
        target: PathBuf,
        /// PID reported by the OS
        pid: Option<u32>,
    },
    /// A file or folder was handed to its default handler
    Opened {
        /// Path that was opened
        path: PathBuf,
    },
}

/// Launches descriptors through a [`LaunchBackend`]
#[derive(Debug, Default)]
pub struct Launcher<B = SystemBackend> {
    backend: B,
    registry: LaunchRegistry,
}

impl Launcher<SystemBackend> {
    /// Launcher backed by the operating system
    pub fn system() -> Self {
        Self::new(SystemBackend)
    }
}

impl<B: LaunchBackend> Launcher<B> {
    /// Create a launcher around `backend`
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            registry: LaunchRegistry::new(),
        }
    }

    /// Processes started so far
    pub fn registry(&self) -> &LaunchRegistry {
        &self.registry
    }

    /// The backend in use
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Launch one descriptor.
    ///
    /// A single attempt is made; failures are logged and returned.
    pub fn launch(&mut self, descriptor: &FileDescriptor) -> Result<LaunchOutcome> {
        info!(
            "Launching {} ({})",
            descriptor.display_name,
            descriptor.kind_label()
        );

        let result = match descriptor.category {
            Category::Application => self.launch_application(&descriptor.source_path),
            Category::Media(_) => self.open_media(&descriptor.source_path),
            Category::Shortcut => match &descriptor.shortcut {
                Some(shortcut) => self.launch_shortcut(descriptor, shortcut),
                None => Err(LauncherError::ShortcutUnresolved(
                    descriptor.source_path.clone(),
                )),
            },
        };

        match &result {
            Ok(outcome) => info!("Launch succeeded: {:?}", outcome),
            Err(e) => error!("Launch of {} failed: {}", descriptor.display_name, e),
        }

        result
    }

    fn launch_application(&mut self, source: &Path) -> Result<LaunchOutcome> {
        self.ensure_exists(source)?;

        // A .lnk listed as an application is handed to the shell, which follows it
        let is_link = source
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("lnk"));
        if is_link {
            return self.open(source);
        }

        self.spawn(&SpawnRequest::bare(source))
    }

    fn open_media(&mut self, source: &Path) -> Result<LaunchOutcome> {
        self.ensure_exists(source)?;
        self.open(source)
    }

    fn launch_shortcut(
        &mut self,
        descriptor: &FileDescriptor,
        shortcut: &ShortcutInfo,
    ) -> Result<LaunchOutcome> {
        if shortcut.is_store_app {
            return Err(LauncherError::StoreAppUnsupported(
                descriptor.display_name.clone(),
            ));
        }

        let target = shortcut
            .target_path
            .as_deref()
            .ok_or_else(|| LauncherError::ShortcutUnresolved(descriptor.source_path.clone()))?;
        self.ensure_exists(target)?;

        if self.backend.is_directory(target) || !self.backend.is_executable(target) {
            return self.open(target);
        }

        let working_directory = (!shortcut.working_directory.trim().is_empty())
            .then(|| PathBuf::from(&shortcut.working_directory));

        self.spawn(&SpawnRequest {
            program: target.to_path_buf(),
            arguments: shortcut.arguments.clone(),
            working_directory,
        })
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if self.backend.target_exists(path) {
            Ok(())
        } else {
            Err(LauncherError::TargetMissing(path.to_path_buf()))
        }
    }

    fn spawn(&mut self, request: &SpawnRequest) -> Result<LaunchOutcome> {
        let pid = self
            .backend
            .spawn(request)
            .map_err(|source| LauncherError::LaunchFailed {
                target: request.program.clone(),
                source,
            })?;

        self.registry.record(&request.program, pid);
        Ok(LaunchOutcome::Spawned {
            target: request.program.clone(),
            pid,
        })
    }

    fn open(&mut self, path: &Path) -> Result<LaunchOutcome> {
        self.backend
            .open_default(path)
            .map_err(|source| LauncherError::LaunchFailed {
                target: path.to_path_buf(),
                source,
            })?;

        Ok(LaunchOutcome::Opened {
            path: path.to_path_buf(),
        })
    }
}
