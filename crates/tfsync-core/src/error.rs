//! Error types for tfsync-core

use std::path::PathBuf;

/// Result type for tfsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tfsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The snapshot file is not valid state JSON
    #[error("Malformed snapshot at {path}: {message}")]
    MalformedSnapshot { path: PathBuf, message: String },

    /// A snapshot resource carries a provider reference in neither known form
    #[error("Invalid provider reference '{reference}' on {address}")]
    InvalidProviderRef { address: String, reference: String },

    /// No shape is registered for a resource type found in the snapshot
    #[error("Unknown resource type '{resource_type}' on {address}")]
    UnknownResourceType {
        address: String,
        resource_type: String,
    },

    /// The external binary could not be started
    #[error("Failed to run `{command}`: {source}")]
    TerraformSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external binary exited unsuccessfully
    #[error("`{command}` exited with code {code}: {stderr}")]
    TerraformFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The confirmation prompt failed
    #[error("Confirmation failed: {message}")]
    Prompt { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from tfsync-fs
    #[error(transparent)]
    Fs(#[from] tfsync_fs::Error),

    /// Scanner error from tfsync-hcl
    #[error(transparent)]
    Hcl(#[from] tfsync_hcl::Error),

    /// Remote or resource-kind error from tfsync-importables
    #[error(transparent)]
    Importables(#[from] tfsync_importables::Error),
}
