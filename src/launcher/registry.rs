//! Record of processes started during this session
//!
//! Only used to show what was launched. It does not track whether a process
//! is still running.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What is known about launches of one target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchRecord {
    /// PID of the most recent launch, when the OS reported one
    pub last_pid: Option<u32>,
    /// Number of successful launches
    pub count: u32,
}

/// Launches keyed by the path that was started
#[derive(Debug, Default)]
pub struct LaunchRegistry {
    records: HashMap<PathBuf, LaunchRecord>,
}

impl LaunchRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful launch of `target`
    pub fn record(&mut self, target: &Path, pid: Option<u32>) {
        let record = self.records.entry(target.to_path_buf()).or_default();
        record.last_pid = pid.or(record.last_pid);
        record.count = record.count.saturating_add(1);
    }

    /// Launch record for `target`, if it was ever started
    pub fn get(&self, target: &Path) -> Option<LaunchRecord> {
        self.records.get(target).copied()
    }

    /// Total number of launches across all targets
    pub fn total_launches(&self) -> u32 {
        self.records
            .values()
            .fold(0, |sum, record| sum.saturating_add(record.count))
    }

    /// Whether nothing has been launched yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
