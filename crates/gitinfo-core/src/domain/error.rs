//! Error taxonomy for git-info.

/// git-info errors.
#[derive(Debug, thiserror::Error)]
pub enum GitInfoError {
    #[error("value of field {field} is not valid UTF-8 text")]
    NotText { field: String },

    #[error("hash too short: got {len} characters, need at least {min}")]
    HashTooShort { len: usize, min: usize },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid time format pattern: {0}")]
    InvalidTimeFormat(String),

    #[error("build arguments do not split as shell words: {0}")]
    ShellSplit(String),

    #[error("git error: {0}")]
    Git(String),

    #[error("HEAD is detached, no active branch")]
    DetachedHead,

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git-info operations.
pub type Result<T> = std::result::Result<T, GitInfoError>;
