//! Command grammar and parsing.

use crate::error::CommandError;

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <old_phone> <new_phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, date: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `help`
    Help,
    /// `close` / `exit`
    Exit,
}

/// Parse one input line into a [`Command`].
///
/// Only the command word is case-insensitive; names and arguments keep the
/// case the user typed. Wrong arity yields a usage error naming the expected
/// shape.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((word, args)) = tokens.split_first() else {
        return Err(CommandError::Usage("type a command, or `help` for the list"));
    };

    match (word.to_lowercase().as_str(), args) {
        ("hello", []) => Ok(Command::Hello),
        ("hello", _) => Err(CommandError::Usage("hello")),

        ("add", [name, phone]) => Ok(Command::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        }),
        ("add", _) => Err(CommandError::Usage("add <name> <phone>")),

        ("change", [name, old_phone, new_phone]) => Ok(Command::Change {
            name: name.to_string(),
            old_phone: old_phone.to_string(),
            new_phone: new_phone.to_string(),
        }),
        ("change", _) => Err(CommandError::Usage("change <name> <old_phone> <new_phone>")),

        ("phone", [name]) => Ok(Command::Phone {
            name: name.to_string(),
        }),
        ("phone", _) => Err(CommandError::Usage("phone <name>")),

        ("all", []) => Ok(Command::All),
        ("all", _) => Err(CommandError::Usage("all")),

        ("add-birthday", [name, date]) => Ok(Command::AddBirthday {
            name: name.to_string(),
            date: date.to_string(),
        }),
        ("add-birthday", _) => Err(CommandError::Usage("add-birthday <name> <DD.MM.YYYY>")),

        ("show-birthday", [name]) => Ok(Command::ShowBirthday {
            name: name.to_string(),
        }),
        ("show-birthday", _) => Err(CommandError::Usage("show-birthday <name>")),

        ("birthdays", []) => Ok(Command::Birthdays),
        ("birthdays", _) => Err(CommandError::Usage("birthdays")),

        ("help", _) => Ok(Command::Help),
        ("close" | "exit", _) => Ok(Command::Exit),

        (other, _) => Err(CommandError::UnknownCommand(other.to_string())),
    }
}
