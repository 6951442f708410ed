//! Tests for the append-only operator journal.

use ftpforge::constants::{JOURNAL_FILE_NAME, JOURNAL_SEAL_WIDTH};
use ftpforge::journal::Journal;
use tempfile::TempDir;

use crate::helpers::journal_contents;

#[test]
fn record_appends_a_timestamped_line() {
    let dir = TempDir::new().expect("create temp dir");
    let journal = Journal::new(dir.path());
    journal.record("backup created").unwrap();

    let log = journal_contents(dir.path());
    let line = log.lines().next().expect("one line written");
    assert!(line.ends_with(" backup created"), "line: {line}");
    // MM-DD-YY_HH:MM:SS prefix.
    assert_eq!(line.len(), "01-01-26_00:00:00 backup created".len());
}

#[test]
fn seal_appends_a_separator_line() {
    let dir = TempDir::new().expect("create temp dir");
    let journal = Journal::new(dir.path());
    journal.seal().unwrap();

    let log = journal_contents(dir.path());
    assert_eq!(log.lines().next(), Some("=".repeat(JOURNAL_SEAL_WIDTH).as_str()));
}

#[test]
fn journal_only_ever_appends() {
    let dir = TempDir::new().expect("create temp dir");
    let journal = Journal::new(dir.path());
    journal.record("first").unwrap();
    journal.record("second").unwrap();
    journal.seal().unwrap();

    let log = journal_contents(dir.path());
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" first"));
    assert!(lines[1].ends_with(" second"));
    assert!(lines[2].starts_with("===="));
    assert_eq!(journal.path(), dir.path().join(JOURNAL_FILE_NAME));
}

#[test]
fn journal_creates_its_directory_on_first_write() {
    let dir = TempDir::new().expect("create temp dir");
    let backup_dir = dir.path().join("conf_backup");
    let journal = Journal::new(&backup_dir);
    journal.record("hello").unwrap();
    assert!(backup_dir.join(JOURNAL_FILE_NAME).is_file());
}
