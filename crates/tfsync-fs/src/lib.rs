//! Filesystem helpers for tfsync
//!
//! Provides path normalization, the read/append/overwrite primitives used by the
//! synchronization phases, and format-aware loading of configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
