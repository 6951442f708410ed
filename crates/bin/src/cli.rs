//! CLI argument definitions for the ftpforge binary.

use std::path::PathBuf;

use clap::Parser;

/// Provision a new FTP account in a FileZilla-style configuration store
#[derive(Parser, Debug)]
#[command(name = "ftpforge")]
#[command(about = "ftpforge: provision FTP accounts in an XML configuration store")]
#[command(version)]
pub struct Cli {
    /// Name of the FTP account to provision.
    ///
    /// Optional at the parser level: the missing-argument contract
    /// (usage message, journal line, exit code 1) is owned by the tool,
    /// not by clap's own usage error.
    pub username: Option<String>,

    /// Path to the server's XML configuration document
    #[arg(
        long,
        env = "FTPFORGE_CONFIG_FILE",
        default_value = "C:\\Program Files (x86)\\FileZilla Server\\FileZilla Server.xml"
    )]
    pub config_file: PathBuf,

    /// Directory receiving configuration backups and the provisioning journal
    #[arg(
        long,
        env = "FTPFORGE_BACKUP_DIR",
        default_value = "C:\\Program Files (x86)\\FileZilla Server\\conf_backup"
    )]
    pub backup_dir: PathBuf,

    /// Root directory under which per-account home directories are created
    #[arg(long, env = "FTPFORGE_HOME_ROOT", default_value = "C:\\ftp")]
    pub home_root: PathBuf,

    /// Server executable invoked to reload the configuration.
    /// Defaults to "FileZilla Server.exe" next to the configuration document.
    #[arg(long, env = "FTPFORGE_RELOAD_PROGRAM")]
    pub reload_program: Option<PathBuf>,
}
