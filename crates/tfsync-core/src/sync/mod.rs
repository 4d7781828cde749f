//! Synchronization runs
//!
//! A run goes through two write phases on the configuration file:
//! - **declare**: headers for new providers and empty `resource` blocks
//! - **render**: the whole file re-emitted from the state snapshot
//!
//! Between them every new resource is imported with the external binary.

mod engine;

pub use engine::SyncEngine;

use tfsync_fs::NormalizedPath;

use crate::diff::Diff;

/// Options for a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Report what would happen without writing files or running the binary.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
    /// Proceed without asking for confirmation
    pub auto_approve: bool,
}

/// What a run would change, computed before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan {
    /// The configuration file being synchronized
    pub output: NormalizedPath,
    pub diff: Diff,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Every remote resource was already declared
    NothingNew,
    /// The confirmation prompt was declined
    Declined,
    DryRun,
    Completed,
}

/// Report from a synchronization run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    /// Actions taken, in order
    pub actions: Vec<String>,
}

impl SyncReport {
    pub fn new(outcome: SyncOutcome) -> Self {
        Self {
            outcome,
            actions: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, action: String) {
        self.actions.push(action);
    }
}
