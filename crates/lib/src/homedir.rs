//! Per-account home directory setup.
//!
//! Builds `<root>/<USERNAME>/` with the fixed subdirectory set, journaling
//! whether each piece was created or already present. Idempotent: re-running
//! after a partial failure completes the missing pieces.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;
use crate::constants::HOME_SUBDIRS;
use crate::journal::Journal;

/// Ensure the home directory tree for `username` exists under `root` and
/// return the home path bound into the account's permission entry.
pub fn ensure_home(root: &Path, username: &str, journal: &Journal) -> Result<PathBuf> {
    let username = username.to_uppercase();
    let home = root.join(&username);

    if !home.exists() {
        fs::create_dir_all(&home)?;
        info!(home = %home.display(), "home directory created");
        journal.record(format!(
            "New directory \"{username}\" created in {}",
            root.display()
        ))?;
    } else {
        journal.record(format!(
            "Home directory of \"{username}\" exists in {}. Checking subfolders.",
            root.display()
        ))?;
    }

    for subdir in HOME_SUBDIRS {
        let dir = home.join(subdir);
        if !dir.exists() {
            fs::create_dir(&dir)?;
            journal.record(format!(
                "New directory \"{subdir}\" created in {}",
                home.display()
            ))?;
        } else {
            journal.record(format!(
                "Directory \"{subdir}\" exists in {}",
                home.display()
            ))?;
        }
    }

    Ok(home)
}
