use assert_cmd::Command;
use std::path::Path;

/// The binary pointed at an isolated data file, run from `dir` so no
/// stray `.env` is picked up.
pub fn bot(dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.current_dir(dir)
        .env("ADDRESSBOOK_FILE", dir.join("book.json"))
        .env_remove("BIRTHDAY_WINDOW")
        .env_remove("ADDRESSBOOK_LOG");
    Ok(cmd)
}
