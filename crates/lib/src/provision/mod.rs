//! Provisioning orchestrator.
//!
//! Sequences one account through existence check, backup, home directory
//! setup, credential generation, document insertion, and the best-effort
//! server reload. Linear with early exits and no retries: every step either
//! succeeds or the run terminates, and a half-applied run is recoverable by
//! re-running the tool; the up-front backup covers a bad insert.

pub mod errors;

pub use errors::ProvisionError;

use std::path::PathBuf;

use tracing::{info, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backup::BackupManager;
use crate::journal::Journal;
use crate::store::{AccountRecord, DocumentStore};
use crate::{Result, credentials, homedir, reload};

/// Paths one provisioning run operates on.
///
/// Passed in explicitly so every external location can be substituted in
/// tests; nothing in the library reads process-wide path constants.
pub struct ProvisionConfig {
    /// The server's XML configuration document.
    pub document_path: PathBuf,
    /// Directory receiving backup snapshots and the operator journal.
    pub backup_dir: PathBuf,
    /// Root under which per-account home directories are created.
    pub home_root: PathBuf,
    /// Server executable invoked to reload the configuration.
    pub reload_program: PathBuf,
}

/// Outcome of a successful provisioning run, carried to the final stdout
/// announcement. The plaintext password is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ProvisionReceipt {
    /// The uppercase account name.
    #[zeroize(skip)]
    pub username: String,
    /// The generated plaintext password. Printed once, never persisted.
    pub password: String,
}

impl std::fmt::Debug for ProvisionReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionReceipt")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Orchestrates provisioning runs against one configuration document.
pub struct Provisioner {
    config: ProvisionConfig,
    store: DocumentStore,
    backups: BackupManager,
    journal: Journal,
}

impl Provisioner {
    /// Create an orchestrator for `config`.
    pub fn new(config: ProvisionConfig) -> Self {
        let store = DocumentStore::new(&config.document_path);
        let backups = BackupManager::new(&config.backup_dir);
        let journal = Journal::new(&config.backup_dir);
        Self {
            config,
            store,
            backups,
            journal,
        }
    }

    /// The operator journal this run writes to.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Provision `username`: check, back up, set up the home tree, generate
    /// credentials, insert the record, and notify the server.
    ///
    /// Reload failures are journaled and swallowed; the record is already
    /// committed by then. Everything else propagates as a structured error.
    pub fn provision(&self, username: &str) -> Result<ProvisionReceipt> {
        let username = username.to_uppercase();

        let mut document = self.store.load()?;
        if document.contains_account(&username) {
            self.journal
                .record(format!("FTP account \"{username}\" already exists."))?;
            return Err(ProvisionError::AccountExists { username }.into());
        }

        self.backups
            .snapshot(self.store.path(), &self.journal)?;

        let home = homedir::ensure_home(&self.config.home_root, &username, &self.journal)?;

        let credentials = credentials::generate(&username);
        let record = AccountRecord::new(
            &credentials.username,
            &credentials.hash,
            &credentials.salt,
            home.to_string_lossy(),
        );

        document.insert_account(&record)?;
        self.store.persist(&document)?;
        info!(username = %username, "account record inserted");
        self.journal
            .record(format!("Parameters for user {username} added."))?;

        self.notify_reload()?;

        Ok(ProvisionReceipt {
            username,
            password: credentials.password.clone(),
        })
    }

    /// Ask the server to re-read its configuration and journal the result.
    /// Failure here never aborts the run.
    fn notify_reload(&self) -> Result<()> {
        match reload::notify(&self.config.reload_program) {
            Ok(report) => {
                self.journal
                    .record(format!("[Reload configuration] Status: {}", report.status))?;
                self.journal
                    .record(format!("[Reload configuration] Error: \"{}\"", report.stderr))?;
                self.journal
                    .record(format!("[Reload configuration] Output: \"{}\"", report.stdout))?;
            }
            Err(err) => {
                warn!("reload notification failed: {err}");
                self.journal
                    .record(format!("[Reload configuration] Failed: {err}"))?;
            }
        }
        Ok(())
    }
}
