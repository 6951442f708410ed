//! Error types for the document store.
//!
//! This module defines structured error types for configuration document
//! operations, providing better error context and type safety compared to
//! string-based errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, mutating, or persisting the
/// configuration document.
///
/// Malformed-document and I/O failures are deliberately separate: the
/// former means an unsupported or hand-edited configuration the operator
/// must fix, the latter a filesystem problem.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration document could not be read.
    #[error("cannot read configuration document {path}: {source}")]
    DocumentRead {
        /// Path of the document that could not be read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Configuration document could not be written back.
    #[error("cannot write configuration document {path}: {source}")]
    DocumentWrite {
        /// Path of the document that could not be written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Document contents are not well-formed XML.
    #[error("malformed configuration document {path}: {source}")]
    Parse {
        /// Path of the document that failed to parse
        path: PathBuf,
        /// The underlying parse error
        source: xmltree::ParseError,
    },

    /// The document has no `<Users>` element among the root's children.
    ///
    /// Seen with custom or hand-edited configurations; insertion refuses to
    /// guess and leaves the on-disk document untouched.
    #[error("configuration document has no <Users> section")]
    MissingUsersSection,

    /// The in-memory tree could not be serialized.
    #[error("cannot serialize configuration document: {reason}")]
    Serialize {
        /// Description of the emitter failure
        reason: String,
    },
}

impl StoreError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StoreError::DocumentRead { .. } | StoreError::DocumentWrite { .. }
        )
    }

    /// Check if this error indicates a malformed or unsupported document.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            StoreError::Parse { .. } | StoreError::MissingUsersSection
        )
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
