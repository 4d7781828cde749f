//! Error types for tfsync-importables

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] tfsync_fs::Error),

    #[error("Unknown resource type: {name}")]
    UnknownKind { name: String },

    #[error("Invalid id '{search_id}' for {kind}: expected {expected}")]
    InvalidSearchId {
        kind: String,
        search_id: String,
        expected: &'static str,
    },

    #[error("No {kind} found with id '{search_id}'")]
    NotFound { kind: String, search_id: String },

    #[error("Remote query for {kind} failed: {message}")]
    Remote { kind: String, message: String },
}
