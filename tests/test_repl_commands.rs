//! End-to-end tests for the interactive command layer.
//!
//! Each test drives a whole session: raw input lines through the parser and
//! dispatcher against one book, asserting on the rendered replies.

use chrono::NaiveDate;
use contact_register::repl::{execute, parse, Outcome};
use contact_register::AddressBook;

// 2024-06-10 is a Monday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Run a session and collect one reply line per input line.
fn session(lines: &[&str]) -> Vec<String> {
    let mut book = AddressBook::new();
    lines
        .iter()
        .map(|line| match parse(line) {
            Ok(command) => match execute(&mut book, command, today(), 7) {
                Outcome::Reply(text) | Outcome::Exit(text) => text,
            },
            Err(err) => err.to_string(),
        })
        .collect()
}

#[test]
fn test_full_session() {
    let replies = session(&[
        "hello",
        "add John 0501234567",
        "add John 0931112233",
        "add-birthday John 15.06.1990",
        "show-birthday John",
        "birthdays",
        "change John 0931112233 0671119999",
        "phone John",
        "exit",
    ]);

    assert_eq!(
        replies,
        [
            "How can I help you?",
            "Contact added.",
            "Phone added to John.",
            "Birthday added.",
            "15.06.1990",
            "John: 2024.06.17",
            "Contact updated.",
            "Contact name: John, phones: 0501234567; 0671119999",
            "Good bye!",
        ]
    );
}

#[test]
fn test_every_core_error_kind_renders_as_text() {
    let replies = session(&[
        "add John 123",                      // validation: phone
        "add John 0501234567",
        "add-birthday John 1990.06.15",      // validation: birthday
        "add-birthday Ghost 15.06.1990",     // contact not found
        "change John 0000000000 0671119999", // phone not found
        "show-birthday John",                // no birthday set
    ]);

    assert!(replies[0].contains("Invalid phone number"));
    assert_eq!(replies[1], "Contact added.");
    assert!(replies[2].contains("Invalid birthday"));
    assert_eq!(replies[3], "Contact not found: Ghost");
    assert_eq!(replies[4], "Phone number not found: 0000000000");
    assert_eq!(replies[5], "No birthday set for contact: John");
}

#[test]
fn test_parse_errors_render_as_text() {
    let replies = session(&["frobnicate", "add John", "change"]);

    assert_eq!(replies[0], "Invalid command: frobnicate");
    assert_eq!(replies[1], "Usage: add <name> <phone>");
    assert_eq!(replies[2], "Usage: change <name> <old_phone> <new_phone>");
}

#[test]
fn test_names_keep_their_case_through_the_loop() {
    let replies = session(&["ADD John 0501234567", "phone John", "phone john"]);

    assert_eq!(replies[0], "Contact added.");
    assert_eq!(
        replies[1],
        "Contact name: John, phones: 0501234567"
    );
    // Lookup is exact: the lowercase key does not exist
    assert_eq!(replies[2], "Contact not found: john");
}

#[test]
fn test_all_lists_contacts_in_key_order() {
    let replies = session(&[
        "add Zoe 0501234567",
        "add Adam 0931112233",
        "all",
    ]);

    assert_eq!(
        replies[2],
        "Contact name: Adam, phones: 0931112233\nContact name: Zoe, phones: 0501234567"
    );
}

#[test]
fn test_close_and_exit_both_terminate() {
    let mut book = AddressBook::new();
    for line in ["close", "exit"] {
        let outcome = execute(&mut book, parse(line).unwrap(), today(), 7);
        assert_eq!(outcome, Outcome::Exit("Good bye!".to_string()));
    }
}
