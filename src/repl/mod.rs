//! Interactive command layer.
//!
//! Thin I/O glue over the core: parses one-line commands, dispatches them to
//! the AddressBook, and renders results and errors as user-facing text. The
//! system clock is read here and passed down, never inside the core.

pub mod command;
pub mod dispatcher;

pub use command::{parse, Command};
pub use dispatcher::{execute, Outcome};
