//! Contact register assistant - main entry point
//!
//! Runs the interactive loop: prompt, read a line, parse, dispatch, print.
//! Everything stateful lives in the library; this binary is I/O glue.

use anyhow::Result;
use chrono::Local;
use contact_register::repl::{self, Outcome};
use contact_register::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the conversation).
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        "Starting contact register assistant"
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF counts as a quit
            println!("Good bye!");
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match repl::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(%e, input = line, "rejected input");
                println!("{}", e);
                continue;
            }
        };

        let today = Local::now().date_naive();
        match repl::execute(&mut book, command, today, config.birthday_window_days) {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Exit(text) => {
                println!("{}", text);
                break;
            }
        }
    }

    if book.is_empty() {
        debug!("session ended with an empty book");
    } else {
        info!(contacts = book.len(), "session ended");
    }

    Ok(())
}
