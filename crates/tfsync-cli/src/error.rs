//! Error types for tfsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tfsync-core
    #[error(transparent)]
    Core(#[from] tfsync_core::Error),

    /// Error from tfsync-fs
    #[error(transparent)]
    Fs(#[from] tfsync_fs::Error),

    /// Error from tfsync-importables
    #[error(transparent)]
    Importables(#[from] tfsync_importables::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
