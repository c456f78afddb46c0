//! Storage error types
//!
//! Error codes:
//! - ZOO_STORE_IO_ERROR (ERROR severity)
//! - ZOO_STORE_WRITE_FAILED (FATAL severity)
//! - ZOO_STORE_CORRUPT (FATAL severity)
//! - ZOO_STORE_ALREADY_EXISTS (ERROR severity)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::observability::{Logger, Severity};

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The document could not be read or its directory created
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be rewritten. Memory and disk may now disagree.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document exists but is not a valid animal document
    #[error("corrupt document {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `create` was asked to overwrite an existing document
    #[error("document already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
}

impl StorageError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "ZOO_STORE_IO_ERROR",
            StorageError::WriteFailed { .. } => "ZOO_STORE_WRITE_FAILED",
            StorageError::Corrupt { .. } => "ZOO_STORE_CORRUPT",
            StorageError::AlreadyExists { .. } => "ZOO_STORE_ALREADY_EXISTS",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            StorageError::Io { .. } | StorageError::AlreadyExists { .. } => Severity::Error,
            StorageError::WriteFailed { .. } | StorageError::Corrupt { .. } => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Path of the document involved
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Io { path, .. }
            | StorageError::WriteFailed { path, .. }
            | StorageError::Corrupt { path, .. }
            | StorageError::AlreadyExists { path } => path,
        }
    }

    /// Log this error at its own severity under `event`.
    pub fn log(&self, event: &str) {
        Logger::log(
            self.severity(),
            event,
            &[
                ("code", self.code()),
                ("error", self.to_string().as_str()),
                ("path", self.path().display().to_string().as_str()),
            ],
        );
    }
}
