//! # Archive Errors

use thiserror::Error;

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors raised while loading the record file
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Data file missing or unreadable
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a JSON array of records
    #[error("Invalid record data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ArchiveError {
    /// I/O failure for the given path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable kind, logged as the `kind` field
    pub fn kind(&self) -> &'static str {
        match self {
            ArchiveError::Io { .. } => "io",
            ArchiveError::Decode(_) => "decode",
        }
    }
}
