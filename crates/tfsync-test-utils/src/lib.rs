//! Shared test fixtures for the tfsync workspace.
//!
//! Dev-dependency only.
//!
//! - [`workspace`]: [`TestWorkspace`], a temporary working directory
//! - [`snapshot`]: [`SnapshotBuilder`] for state snapshot JSON

pub mod snapshot;
pub mod workspace;

pub use snapshot::SnapshotBuilder;
pub use workspace::TestWorkspace;
