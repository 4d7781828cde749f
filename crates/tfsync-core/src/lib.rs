//! Configuration synchronization engine for tfsync
//!
//! A run scans the configuration file, diffs it against the remote inventory,
//! declares what is missing, imports it with the external tool and finally
//! re-emits the file from the resulting state snapshot.
//!
//! - [`diff`]: which remote definitions and providers are new
//! - [`declare`]: declaration headers appended before import
//! - [`state`]: the state snapshot model
//! - [`adapter`]: snapshot to configuration text
//! - [`terraform`]: the external binary contract
//! - [`sync`]: the [`SyncEngine`] driving a run
//! - [`config`]: layered [`SyncConfig`] resolution

pub mod adapter;
pub mod config;
pub mod declare;
pub mod diff;
pub mod error;
pub mod state;
pub mod sync;
pub mod terraform;

pub use adapter::adapt;
pub use config::{ConfigResolver, SyncConfig};
pub use diff::{Diff, diff};
pub use error::{Error, Result};
pub use state::{ProviderRef, Snapshot};
pub use sync::{SyncEngine, SyncOptions, SyncOutcome, SyncPlan, SyncReport};
pub use terraform::{Terraform, TerraformCli};
