use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;
use crate::store::json::DEFAULT_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "assistant-bot",
    version,
    about = "Interactive contact book with birthday reminders"
)]
pub struct Cli {
    /// Address book file (JSON)
    #[arg(long, env = "ADDRESSBOOK_FILE", default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// Days ahead scanned by the `birthdays` command
    #[arg(long, env = "BIRTHDAY_WINDOW", default_value_t = 7)]
    pub window: u32,

    /// Log filter written to stderr, e.g. `debug` or `assistant_bot=trace`
    #[arg(long, env = "ADDRESSBOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Commands understood by the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(AppError::ParseCommand(token.to_string())),
        }
    }
}
