//! Constants used throughout the ftpforge library.
//!
//! This module provides central definitions for on-disk names and formats
//! shared between the provisioning components and their tests.

/// File name of the append-only operator journal, created inside the
/// backup directory.
pub const JOURNAL_FILE_NAME: &str = "new_ftp_accounts.log";

/// Timestamp prefix format for journal lines.
pub const JOURNAL_TIMESTAMP_FORMAT: &str = "%m-%d-%y_%H:%M:%S";

/// Width of the separator line sealing one invocation's journal entry.
pub const JOURNAL_SEAL_WIDTH: usize = 80;

/// Timestamp suffix format for backup snapshot names. Second resolution;
/// two runs within the same second overwrite each other's snapshot.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "_%m_%d_%y_%H%M%S";

/// Fixed subdirectories created under every account's home directory.
pub const HOME_SUBDIRS: [&str; 3] = ["subdir_1", "subdir_2", "subdir_3"];

/// Flag passed to the server executable to make it re-read the
/// configuration document.
pub const RELOAD_FLAG: &str = "/reload-config";
