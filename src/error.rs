//! Error types for the contact register.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by AddressBook and Record operations.
///
/// Lookup-style operations (`find`, `delete`, `remove_phone`) treat absence
/// as a normal `None`/no-op and never return these; operations that require
/// the target to exist do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist in the book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record holds no phone with the given value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// The contact exists but has no birthday set
    #[error("No birthday set for contact: {0}")]
    NoBirthday(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors produced while parsing user command input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognized
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// The command word is known but the arguments don't fit
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
