//!
//! ftpforge: provisioning of FTP accounts in FileZilla-style XML configuration stores.
//!
//! The library walks one account through the full provisioning sequence:
//! existence check, configuration backup, home directory setup, credential
//! generation, document mutation, and a best-effort server reload. The
//! binary in `crates/bin` is a thin adapter that translates the typed
//! outcome of [`Provisioner::provision`] into process exit codes.
//!
//! ## Core Concepts
//!
//! * **Document Store (`store::DocumentStore`)**: the on-disk XML
//!   configuration file acting as the server's user database. Loaded as a
//!   whole, mutated in memory, and re-serialized with stable indentation.
//! * **Account Record (`store::AccountRecord`)**: one user's persisted
//!   entry, carrying the fixed permission/limit contract the consuming
//!   server expects.
//! * **Credential Set (`credentials::CredentialSet`)**: a freshly generated
//!   password, salt, and salted SHA-512 hash. Only hash and salt are ever
//!   persisted; the plaintext password is zeroized on drop.
//! * **Backup Snapshot (`backup::BackupManager`)**: a timestamped copy of
//!   the document taken before every mutation, which doubles as the
//!   recovery mechanism for a bad insert.
//! * **Operator Journal (`journal::Journal`)**: the append-only
//!   `new_ftp_accounts.log` recording every provisioning step.

pub mod backup;
pub mod constants;
pub mod credentials;
pub mod homedir;
pub mod journal;
pub mod provision;
pub mod reload;
pub mod store;

/// Re-export the orchestrator types for easier access.
pub use provision::{ProvisionConfig, ProvisionReceipt, Provisioner};

/// Result type used throughout the ftpforge library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ftpforge library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured document store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured backup errors from the backup module
    #[error(transparent)]
    Backup(backup::BackupError),

    /// Structured orchestration errors from the provision module
    #[error(transparent)]
    Provision(provision::ProvisionError),

    /// Structured reload errors from the reload module
    #[error(transparent)]
    Reload(reload::ReloadError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Store(_) => "store",
            Error::Backup(_) => "backup",
            Error::Provision(_) => "provision",
            Error::Reload(_) => "reload",
        }
    }

    /// Check if this error indicates the account is already present.
    ///
    /// The CLI adapter maps this outcome to exit code 2.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Error::Provision(provision::ProvisionError::AccountExists { .. })
        )
    }

    /// Check if this error indicates the backup source was missing.
    ///
    /// The CLI adapter maps this outcome to exit code 3.
    pub fn is_source_missing(&self) -> bool {
        matches!(
            self,
            Error::Backup(backup::BackupError::SourceMissing { .. })
        )
    }

    /// Check if this error indicates a malformed or unsupported document.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            Error::Backup(backup_err) => backup_err.is_io_error(),
            _ => false,
        }
    }
}
