//! Error types for the backup manager.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while snapshotting the configuration document.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The file to back up does not exist.
    ///
    /// Fatal to the whole provisioning run; the CLI adapter maps this to
    /// exit code 3.
    #[error("configuration file not found: {path}")]
    SourceMissing {
        /// Path of the missing source file
        path: PathBuf,
    },

    /// The backup directory could not be created.
    #[error("cannot create backup directory {path}: {source}")]
    CreateDir {
        /// Path of the directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The snapshot could not be written.
    #[error("cannot write backup snapshot {path}: {source}")]
    Snapshot {
        /// Path of the snapshot that could not be written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl BackupError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            BackupError::CreateDir { .. } | BackupError::Snapshot { .. }
        )
    }
}

// Conversion from BackupError to the main Error type
impl From<BackupError> for crate::Error {
    fn from(err: BackupError) -> Self {
        crate::Error::Backup(err)
    }
}
