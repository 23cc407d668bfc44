mod common;

use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn contacts_survive_restart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    common::bot(dir.path())?
        .write_stdin(
            "add John 1234567890\n\
             add-birthday John 15-10-1990\n\
             add Jane 5555555555\n\
             change Jane 6666666666\n\
             exit\n",
        )
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("book.json"))?;
    assert!(saved.contains("\"15-10-1990\""));

    common::bot(dir.path())?
        .write_stdin("phone John\nshow-birthday John\nphone Jane\nexit\n")
        .assert()
        .success()
        .stdout(contains("1234567890"))
        .stdout(contains("15-10-1990"))
        .stdout(contains("6666666666"))
        .stdout(contains("5555555555").not());

    Ok(())
}

#[test]
fn file_flag_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let custom = dir.path().join("data").join("contacts.json");

    common::bot(dir.path())?
        .arg("--file")
        .arg(&custom)
        .write_stdin("add John 1234567890\nexit\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("book.json").exists());
    Ok(())
}

#[test]
fn unreadable_file_starts_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("book.json"), "this is not json")?;

    common::bot(dir.path())?
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(contains("No contacts!."));

    Ok(())
}
