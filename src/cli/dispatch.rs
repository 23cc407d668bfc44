use chrono::NaiveDate;
use tracing::{debug, error};

use crate::cli::command::Command;
use crate::domain::AddressBook;
use crate::errors::AppError;
use crate::store::{BookStore, load_or_default};
use crate::validation::{format_birthday, validate_phone};

pub const NOT_FOUND: &str = "Contact not found!.";

/// What the prompt loop should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(Vec<String>),
    Exit(String),
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Continue(vec![text.into()])
    }
}

/// Owns the address book and the store it is saved to, and answers one
/// command line at a time.
pub struct Assistant<S: BookStore> {
    book: AddressBook,
    store: S,
    window_days: u32,
}

impl<S: BookStore> Assistant<S> {
    pub fn new(store: S, window_days: u32) -> Self {
        let book = load_or_default(&store);
        Self {
            book,
            store,
            window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::line("Empty input. Please enter a command.");
        }

        let (token, args) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };
        debug!(command = token, "dispatching");

        let result = token
            .parse::<Command>()
            .and_then(|command| self.execute(command, args, today));

        match result {
            Ok(reply) => reply,
            Err(e) if e.is_user_input() => Reply::line(e.to_string()),
            Err(e) => {
                error!(command = token, error = %e, "command failed");
                Reply::line(format!("Error: {e}"))
            }
        }
    }

    fn execute(&mut self, command: Command, args: &str, today: NaiveDate) -> Result<Reply, AppError> {
        match command {
            Command::Hello => Ok(Reply::line("How can I help you?")),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.upcoming_birthdays(today)),
            Command::Exit => Ok(Reply::Exit("Good bye!".to_string())),
        }
    }

    fn add_contact(&mut self, args: &str) -> Result<Reply, AppError> {
        let (name, phone) = two_args(args, "Enter name and phone please")?;
        // Checked before upsert so a bad phone never leaves an empty record behind
        validate_phone(phone)?;

        let (record, created) = self.book.upsert(name);
        record.add_phone(phone)?;
        self.persist()?;

        Ok(Reply::line(if created {
            "Contact added."
        } else {
            "Contact updated."
        }))
    }

    fn change_contact(&mut self, args: &str) -> Result<Reply, AppError> {
        let (name, phone) = two_args(args, "Enter name and phone please")?;
        validate_phone(phone)?;

        match self.book.find_mut(name) {
            Some(record) => {
                record.replace_phones(phone)?;
                self.persist()?;
                Ok(Reply::line("Contact updated!."))
            }
            None => Ok(Reply::line(NOT_FOUND)),
        }
    }

    fn show_phone(&self, args: &str) -> Result<Reply, AppError> {
        let name = one_arg(args)?;

        Ok(match self.book.find(name) {
            Some(record) => Reply::line(record.phones_display()),
            None => Reply::line(NOT_FOUND),
        })
    }

    fn show_all(&self) -> Reply {
        if self.book.is_empty() {
            return Reply::line("No contacts!.");
        }

        let lines = self
            .book
            .all()
            .map(|record| {
                format!(
                    "{}: Phones: {}, Birthday: {}",
                    record.name,
                    record.phones_display(),
                    record
                        .birthday_display()
                        .unwrap_or_else(|| "No birthday set".to_string())
                )
            })
            .collect();
        Reply::Continue(lines)
    }

    fn add_birthday(&mut self, args: &str) -> Result<Reply, AppError> {
        let (name, birthday) = two_args(args, "Enter name and birthday please")?;

        match self.book.find_mut(name) {
            Some(record) => {
                record.set_birthday(birthday)?;
                self.persist()?;
                Ok(Reply::line("Birthday added!."))
            }
            None => Ok(Reply::line(NOT_FOUND)),
        }
    }

    fn show_birthday(&self, args: &str) -> Result<Reply, AppError> {
        let name = one_arg(args)?;

        Ok(match self.book.find(name) {
            Some(record) => Reply::line(
                record
                    .birthday_display()
                    .unwrap_or_else(|| "No birthday set!.".to_string()),
            ),
            None => Reply::line(NOT_FOUND),
        })
    }

    fn upcoming_birthdays(&self, today: NaiveDate) -> Reply {
        let upcoming = self.book.upcoming(today, self.window_days);
        if upcoming.is_empty() {
            return Reply::line("No upcoming birthdays!.");
        }

        Reply::Continue(
            upcoming
                .iter()
                .map(|entry| format!("{}: {}", entry.name, format_birthday(&entry.date)))
                .collect(),
        )
    }

    fn persist(&mut self) -> Result<(), AppError> {
        self.store.save(&self.book)
    }
}

/// First two whitespace separated arguments; surplus tokens are ignored.
fn two_args<'a>(args: &'a str, guidance: &str) -> Result<(&'a str, &'a str), AppError> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(AppError::MissingArguments(guidance.to_string())),
    }
}

fn one_arg(args: &str) -> Result<&str, AppError> {
    let name = args.trim();
    if name.is_empty() {
        return Err(AppError::MissingArguments("Enter name!".to_string()));
    }
    Ok(name)
}
