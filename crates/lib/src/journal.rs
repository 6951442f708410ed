//! Append-only operator journal.
//!
//! Every provisioning step writes one human-readable line to
//! `new_ftp_accounts.log` in the backup directory, including the failing
//! branches. The file is opened, appended, and closed per write, bounding
//! resource usage to one descriptor at a time, and is never truncated by
//! this tool.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::Result;
use crate::constants::{JOURNAL_FILE_NAME, JOURNAL_SEAL_WIDTH, JOURNAL_TIMESTAMP_FORMAT};

/// Handle to the journal file inside the backup directory.
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Create a journal handle for `backup_dir`.
    pub fn new(backup_dir: impl AsRef<Path>) -> Self {
        Self {
            path: backup_dir.as_ref().join(JOURNAL_FILE_NAME),
        }
    }

    /// Path of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line.
    pub fn record(&self, message: impl AsRef<str>) -> Result<()> {
        let stamp = Local::now().format(JOURNAL_TIMESTAMP_FORMAT);
        self.append_line(&format!("{stamp} {}", message.as_ref()))
    }

    /// Append the separator line closing one invocation's entry.
    pub fn seal(&self) -> Result<()> {
        self.append_line(&"=".repeat(JOURNAL_SEAL_WIDTH))
    }

    fn append_line(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
