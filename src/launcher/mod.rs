//! Launching
//!
//! Starts applications and shortcut targets as detached processes and opens
//! everything else with the default handler.

pub mod backend;
pub mod dispatch;
pub mod registry;

pub use backend::{LaunchBackend, SpawnRequest, SystemBackend, is_executable_file, split_arguments};
pub use dispatch::{LaunchOutcome, Launcher};
pub use registry::{LaunchRecord, LaunchRegistry};
