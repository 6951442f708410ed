//! Shared fixtures for the ftpforge integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use ftpforge::{ProvisionConfig, Provisioner};
use tempfile::TempDir;

/// A configuration document shaped like the server's own output: settings
/// and groups ahead of an empty Users collection.
pub const EMPTY_USERS_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<FileZillaServer>
  <Settings>
    <Item name="Serverports" type="string">21</Item>
  </Settings>
  <Groups />
  <Users />
</FileZillaServer>"#;

/// Same shape with one existing account.
pub const POPULATED_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<FileZillaServer>
  <Settings>
    <Item name="Serverports" type="string">21</Item>
  </Settings>
  <Groups />
  <Users>
    <User Name="EXISTING">
      <Option Name="Pass">AA</Option>
      <Option Name="Salt">BB</Option>
    </User>
  </Users>
</FileZillaServer>"#;

/// A hand-edited document with no Users collection at all.
pub const NO_USERS_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<FileZillaServer>
  <Settings>
    <Item name="Serverports" type="string">21</Item>
  </Settings>
</FileZillaServer>"#;

/// One temporary deployment: document, backup directory, home root, and a
/// provisioner wired to them. The reload program points at a path that does
/// not exist, keeping reload on its non-fatal failure branch unless a test
/// swaps in a real one.
pub struct TestDeployment {
    pub dir: TempDir,
    pub document_path: PathBuf,
    pub backup_dir: PathBuf,
    pub home_root: PathBuf,
    pub provisioner: Provisioner,
}

pub fn deployment_with(document: &str) -> TestDeployment {
    let dir = TempDir::new().expect("create temp dir");
    let document_path = dir.path().join("FileZilla Server.xml");
    fs::write(&document_path, document).expect("write sample document");
    let backup_dir = dir.path().join("conf_backup");
    let home_root = dir.path().join("homes");
    let provisioner = Provisioner::new(ProvisionConfig {
        document_path: document_path.clone(),
        backup_dir: backup_dir.clone(),
        home_root: home_root.clone(),
        reload_program: dir.path().join("no-such-reload-program"),
    });
    TestDeployment {
        dir,
        document_path,
        backup_dir,
        home_root,
        provisioner,
    }
}

/// A provisioner over the same deployment with a different reload program.
pub fn provisioner_with_reload(deployment: &TestDeployment, reload_program: PathBuf) -> Provisioner {
    Provisioner::new(ProvisionConfig {
        document_path: deployment.document_path.clone(),
        backup_dir: deployment.backup_dir.clone(),
        home_root: deployment.home_root.clone(),
        reload_program,
    })
}

pub fn journal_contents(backup_dir: &Path) -> String {
    fs::read_to_string(backup_dir.join("new_ftp_accounts.log")).unwrap_or_default()
}

/// All backup snapshots (`.xml` files) currently in the backup directory.
pub fn backup_snapshots(backup_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(backup_dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "xml"))
        .collect()
}
