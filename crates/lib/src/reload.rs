//! Reload collaborator: tells the running server to re-read its
//! configuration so a newly inserted account becomes active without a
//! restart.
//!
//! The invocation is best-effort from the orchestrator's point of view,
//! since by the time reload runs the record is already committed. This
//! module only reports; it never decides the run's outcome.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::Result;
use crate::constants::RELOAD_FLAG;

/// Captured result of one reload invocation, destined for the journal.
pub struct ReloadReport {
    /// Exit code of the reload executable, `-1` when terminated by signal.
    pub status: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Errors that can occur when invoking the reload executable.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The reload executable could not be started.
    #[error("cannot invoke reload program {program}: {source}")]
    Spawn {
        /// Path of the program that could not be started
        program: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

// Conversion from ReloadError to the main Error type
impl From<ReloadError> for crate::Error {
    fn from(err: ReloadError) -> Self {
        crate::Error::Reload(err)
    }
}

/// Invoke `program` with the fixed reload flag and capture its output.
pub fn notify(program: &Path) -> Result<ReloadReport> {
    let output = Command::new(program)
        .arg(RELOAD_FLAG)
        .output()
        .map_err(|source| ReloadError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    Ok(ReloadReport {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
