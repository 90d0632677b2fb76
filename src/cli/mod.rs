pub mod contact_commands;

use std::io::{self, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::model::AddressBook;
use crate::storage;

/// Outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A reply to print; the book is persisted afterwards.
    Reply(String),
    /// `close` / `exit`.
    Exit,
    /// Blank input, nothing to do.
    Empty,
}

/// Run the interactive loop against the snapshot at `path`.
pub fn run(path: &Path) {
    let mut book = match storage::load(path) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Error loading address book: {}", e);
            std::process::exit(1);
        }
    };

    println!("Welcome to the assistant bot!");
    loop {
        let input = match read_line("Enter a command: ") {
            Some(line) => line,
            // EOF behaves like `exit`.
            None => break,
        };

        match dispatch(&input, &mut book, today()) {
            Dispatch::Empty => continue,
            Dispatch::Reply(reply) => {
                println!("{}", reply);
                persist(path, &book);
            }
            Dispatch::Exit => break,
        }
    }

    println!("Good bye!");
    persist(path, &book);
}

/// Parse one input line and run the matching handler. The first token
/// (case-insensitive) is the command; the rest are positional arguments.
/// Tokens beyond what a command consumes are silently ignored.
pub fn dispatch(input: &str, book: &mut AddressBook, today: NaiveDate) -> Dispatch {
    let mut parts = input.split_whitespace();
    let command = match parts.next() {
        Some(token) => token.to_lowercase(),
        None => return Dispatch::Empty,
    };
    let args: Vec<&str> = parts.collect();

    let reply = match command.as_str() {
        "close" | "exit" => return Dispatch::Exit,
        "hello" => contact_commands::hello(),
        "add" => contact_commands::add(&args, book),
        "change" => contact_commands::change(&args, book),
        "phone" => contact_commands::phone(&args, book),
        "all" => contact_commands::all(book),
        "add-birthday" => contact_commands::add_birthday(&args, book),
        "show-birthday" => contact_commands::show_birthday(&args, book),
        "birthdays" => contact_commands::birthdays(book, today),
        _ => "Invalid command.".to_string(),
    };

    Dispatch::Reply(reply)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prompt and read a line from stdin. Returns None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

/// Full-snapshot save; an unwritable store is fatal.
fn persist(path: &Path, book: &AddressBook) {
    if let Err(e) = storage::save(path, book) {
        eprintln!("Error saving address book: {}", e);
        std::process::exit(1);
    }
}
