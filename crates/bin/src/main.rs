//! The main entry point for the ftpforge CLI.
//!
//! Thin adapter over the `ftpforge` library: parses arguments, runs the
//! provisioning orchestrator, and translates its typed outcome into the
//! process exit-code contract (0 success, 1 usage, 2 already exists,
//! 3 source configuration missing).

use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use ftpforge::journal::Journal;
use ftpforge::{ProvisionConfig, Provisioner};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

const EXIT_USAGE: i32 = 1;
const EXIT_ACCOUNT_EXISTS: i32 = 2;
const EXIT_SOURCE_MISSING: i32 = 3;

fn main() {
    // Initialize tracing. Diagnostics go to stderr so the two-line stdout
    // announcement stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ftpforge=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(username) = cli.username else {
        eprintln!("New user account must be specified.\nUSAGE: ftpforge <user>");
        let journal = Journal::new(&cli.backup_dir);
        if let Err(err) = journal
            .record("Error missing username.")
            .and_then(|_| journal.seal())
        {
            error!("cannot write journal: {err}");
        }
        exit(EXIT_USAGE);
    };

    let reload_program = cli
        .reload_program
        .unwrap_or_else(|| default_reload_program(&cli.config_file));

    let provisioner = Provisioner::new(ProvisionConfig {
        document_path: cli.config_file,
        backup_dir: cli.backup_dir,
        home_root: cli.home_root,
        reload_program,
    });

    match provisioner.provision(&username) {
        Ok(receipt) => {
            println!("user:     {}", receipt.username);
            println!("password: {}", receipt.password);
            seal_journal(&provisioner);
        }
        Err(err) if err.is_already_exists() => {
            println!(
                "FTP account \"{}\" already exists.",
                username.to_uppercase()
            );
            seal_journal(&provisioner);
            exit(EXIT_ACCOUNT_EXISTS);
        }
        Err(err) if err.is_source_missing() => {
            eprintln!("Configuration file not found.");
            exit(EXIT_SOURCE_MISSING);
        }
        Err(err) => {
            // Unsupported or corrupted configuration; surface the full
            // error for the operator and terminate.
            error!("provisioning failed: {err}");
            eprintln!("Error: {err:?}");
            exit(1);
        }
    }
}

/// The reload executable defaults to the server binary sitting next to the
/// configuration document.
fn default_reload_program(config_file: &Path) -> PathBuf {
    config_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("FileZilla Server.exe")
}

fn seal_journal(provisioner: &Provisioner) {
    if let Err(err) = provisioner.journal().seal() {
        error!("cannot seal journal entry: {err}");
    }
}
