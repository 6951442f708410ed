//! Error types for the provisioning orchestrator.

use thiserror::Error;

/// Errors that can occur while orchestrating a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// An account with this name is already present in the document.
    ///
    /// The document is left byte-for-byte unchanged. The CLI adapter maps
    /// this outcome to exit code 2.
    #[error("FTP account \"{username}\" already exists")]
    AccountExists {
        /// The uppercase account name that was found
        username: String,
    },
}

// Conversion from ProvisionError to the main Error type
impl From<ProvisionError> for crate::Error {
    fn from(err: ProvisionError) -> Self {
        crate::Error::Provision(err)
    }
}
