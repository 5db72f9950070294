#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the shell in `dir`, with a private home so no user config leaks in.
fn jotter_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("jotter"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

#[test]
fn test_save_creates_note_file() {
    let temp = TempDir::new().unwrap();

    jotter_cmd(&temp)
        .write_stdin("title foo\nwrite hello\nwrite world\nsave\nls\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."))
        .stdout(predicate::str::contains("Note saved: foo"))
        .stdout(predicate::str::contains("  foo"));

    let saved = fs::read_to_string(temp.path().join("notes").join("foo.txt")).unwrap();
    assert_eq!(saved, "hello\nworld");
}

#[test]
fn test_existing_notes_listed_at_startup() {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join("notes");
    fs::create_dir(&notes).unwrap();
    fs::write(notes.join("beta.txt"), "b").unwrap();
    fs::write(notes.join("alpha.txt"), "a").unwrap();
    fs::write(notes.join("alpha_draft.txt"), "draft").unwrap();

    jotter_cmd(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout("  alpha\n  beta\n");
}

#[test]
fn test_delete_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join("notes");
    fs::create_dir(&notes).unwrap();
    fs::write(notes.join("keep.txt"), "k").unwrap();
    fs::write(notes.join("drop.txt"), "d").unwrap();

    jotter_cmd(&temp)
        .write_stdin("delete keep\nn\ndelete drop\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."))
        .stdout(predicate::str::contains("Deleted: drop"));

    assert!(notes.join("keep.txt").exists());
    assert!(!notes.join("drop.txt").exists());
}

#[test]
fn test_errors_do_not_stop_the_shell() {
    let temp = TempDir::new().unwrap();

    jotter_cmd(&temp)
        .write_stdin("open ghost\ntitle x\nsave\nbogus\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Note not found: ghost"))
        .stdout(predicate::str::contains("Warning: Note content is empty"))
        .stdout(predicate::str::contains("[Note content is empty]"));
}

#[test]
fn test_config_file_sets_notes_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("jotter.toml"), "notes_dir = \"journal\"\n").unwrap();

    jotter_cmd(&temp)
        .write_stdin("title day one\nwrite sunny\nsave\n")
        .assert()
        .success();

    assert!(temp.path().join("journal").join("day one.txt").exists());
    assert!(!temp.path().join("notes").exists());
}

#[test]
fn test_notes_dir_flag_and_root_command() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other");
    fs::create_dir(&other).unwrap();
    fs::write(other.join("foo.txt"), "pre-existing").unwrap();

    jotter_cmd(&temp)
        .args(["--notes-dir", "first", "--no-autosave"])
        .write_stdin(format!("root {}\nopen foo\n", other.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("  foo"))
        .stdout(predicate::str::contains("pre-existing"));

    assert!(temp.path().join("first").is_dir());
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    jotter_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jotter v"));
}
