//! Contact Register - a personal address book with birthday reminders.
//!
//! This library provides an in-memory register of named contacts, each with
//! validated phone numbers and an optional birthday, plus the query answering
//! "whose birthday falls in the next week", with weekend occurrences shifted
//! to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, birthdays)
//! - **models**: The contact record and its mutation operations
//! - **book**: The keyed record collection and the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repl**: Command parsing and dispatch for the interactive assistant

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
