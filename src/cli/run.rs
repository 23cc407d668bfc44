use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::command::Cli;
use crate::cli::dispatch::{Assistant, Reply};
use crate::errors::AppError;
use crate::store::{BookStore, JsonStore};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    if !init_tracing(&cli.log_level) {
        warn!(filter = %cli.log_level, "invalid log filter, using warn");
    }
    info!(file = %cli.file.display(), window = cli.window, "starting assistant");

    let mut assistant = Assistant::new(JsonStore::new(cli.file), cli.window);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    interact(&mut assistant, stdin.lock(), &mut stdout, || {
        Local::now().date_naive()
    })
}

/// The prompt loop. Runs until `close`/`exit` or end of input.
pub fn interact<S, R, W, F>(
    assistant: &mut Assistant<S>,
    mut input: R,
    output: &mut W,
    today: F,
) -> Result<(), AppError>
where
    S: BookStore,
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // stdin closed
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        // Badly encoded bytes are still user input and get a normal reply
        let line = String::from_utf8_lossy(&buf);

        match assistant.handle(&line, today()) {
            Reply::Continue(replies) => {
                for reply in replies {
                    writeln!(output, "{reply}")?;
                }
            }
            Reply::Exit(farewell) => {
                writeln!(output, "{farewell}")?;
                return Ok(());
            }
        }
    }
}

/// Installs the stderr subscriber. Returns `false` when `filter` did not
/// parse and the `warn` default was used instead.
fn init_tracing(filter: &str) -> bool {
    let (filter, valid) = match EnvFilter::try_new(filter) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("warn"), false),
    };

    // Logs go to stderr, stdout belongs to the conversation
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    valid
}
