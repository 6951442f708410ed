//! Backup manager for the configuration document.
//!
//! A timestamped snapshot is taken before every mutating run. Snapshots are
//! the recovery mechanism for a bad insert and are never rotated or pruned
//! by this tool. Retention is an operator concern.

pub mod errors;

pub use errors::BackupError;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use filetime::FileTime;
use tracing::info;

use crate::Result;
use crate::constants::BACKUP_TIMESTAMP_FORMAT;
use crate::journal::Journal;

/// Creates timestamped snapshots of the configuration document inside one
/// backup directory.
pub struct BackupManager {
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a backup manager writing into `backup_dir`.
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    /// Directory receiving the snapshots.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Snapshot `source` into the backup directory, creating the directory
    /// on first use.
    ///
    /// The snapshot is named `<stem>_<MM>_<DD>_<YY>_<HHMMSS>.xml` and
    /// carries the source's contents and timestamps. Two runs within the
    /// same second overwrite each other's snapshot; second resolution is
    /// accepted for an interactively invoked tool.
    pub fn snapshot(&self, source: &Path, journal: &Journal) -> Result<PathBuf> {
        if !self.backup_dir.exists() {
            fs::create_dir_all(&self.backup_dir).map_err(|err| BackupError::CreateDir {
                path: self.backup_dir.clone(),
                source: err,
            })?;
            journal.record(format!(
                "New directory created: {}",
                self.backup_dir.display()
            ))?;
        }

        if !source.is_file() {
            journal.record("Configuration file not found.")?;
            return Err(BackupError::SourceMissing {
                path: source.to_path_buf(),
            }
            .into());
        }

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("config");
        let stamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
        let file_name = format!("{stem}{stamp}.xml");
        let destination = self.backup_dir.join(&file_name);

        copy_with_times(source, &destination)?;

        info!(snapshot = %destination.display(), "configuration backed up");
        journal.record(format!("Backup created \"{file_name}\""))?;
        Ok(destination)
    }
}

/// Copy contents, then mirror the source's accessed/modified timestamps
/// onto the destination.
fn copy_with_times(source: &Path, destination: &Path) -> Result<()> {
    let snapshot_err = |err: std::io::Error| BackupError::Snapshot {
        path: destination.to_path_buf(),
        source: err,
    };

    fs::copy(source, destination).map_err(snapshot_err)?;

    let metadata = fs::metadata(source).map_err(snapshot_err)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(destination, atime, mtime).map_err(snapshot_err)?;
    Ok(())
}
