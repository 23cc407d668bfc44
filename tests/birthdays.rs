mod common;

use chrono::{Datelike, Days, Local};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn upcoming_birthdays_use_this_year() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let today = Local::now().date_naive();
    let in_thirty_days = today.checked_add_days(Days::new(30)).ok_or("date overflow")?;

    // Born in a leap year so a 29 February still parses
    let script = format!(
        "add Today 1234567890\n\
         add-birthday Today {}-2000\n\
         add Later 1234567890\n\
         add-birthday Later {}-2000\n\
         birthdays\n\
         exit\n",
        today.format("%d-%m"),
        in_thirty_days.format("%d-%m"),
    );

    common::bot(dir.path())?
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains(format!("Today: {}-{}", today.format("%d-%m"), today.year())))
        .stdout(contains("Later:").not());

    // Past the end of the year the occurrence is in the past and stays hidden
    if in_thirty_days.year() == today.year() {
        common::bot(dir.path())?
            .args(["--window", "30"])
            .write_stdin("birthdays\nexit\n")
            .assert()
            .success()
            .stdout(contains("Later:"));
    }

    Ok(())
}

#[test]
fn show_birthday_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    common::bot(dir.path())?
        .write_stdin(
            "add John 1234567890\n\
             show-birthday John\n\
             add-birthday John 31-02-1990\n\
             add-birthday John 07-01-1990\n\
             show-birthday John\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("No birthday set!."))
        .stdout(contains("Invalid date format. Use DD-MM-YYYY"))
        .stdout(contains("Birthday added!."))
        .stdout(contains("07-01-1990"));

    Ok(())
}
