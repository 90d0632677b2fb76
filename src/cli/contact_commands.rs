use chrono::NaiveDate;

use crate::error::AbookError;
use crate::model::field::DATE_FORMAT;
use crate::model::AddressBook;
use crate::ops::contact_ops::{self, AddOutcome};
use crate::queries::birthday_queries;

/// Reply for wrong argument counts and for phone/date validation
/// failures; both classes share one text.
pub const MSG_BAD_ARGS: &str = "Please enter name and phone or date please.";
/// Reply when a command that needs a name gets none.
pub const MSG_MISSING_NAME: &str = "Please enter user name or required argument.";
/// Reply for contact and phone lookup misses.
pub const MSG_NOT_FOUND: &str = "Contact not found.";

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create-or-update.
pub fn add(args: &[&str], book: &mut AddressBook) -> String {
    let (name, phone) = match (args.first(), args.get(1)) {
        (Some(name), Some(phone)) => (*name, *phone),
        _ => return MSG_BAD_ARGS.to_string(),
    };

    match contact_ops::add_contact(book, name, phone) {
        Ok(AddOutcome::Created) => "Contact added.".to_string(),
        Ok(AddOutcome::PhoneAppended) => "Contact updated (phone added).".to_string(),
        Err(e) => user_message(&e),
    }
}

/// `change <name> <old_phone> <new_phone>`.
pub fn change(args: &[&str], book: &mut AddressBook) -> String {
    let (name, old_phone, new_phone) = match (args.first(), args.get(1), args.get(2)) {
        (Some(name), Some(old), Some(new)) => (*name, *old, *new),
        _ => return MSG_BAD_ARGS.to_string(),
    };

    match contact_ops::change_phone(book, name, old_phone, new_phone) {
        Ok(()) => "Contact updated (phone changed).".to_string(),
        Err(e) => user_message(&e),
    }
}

/// `phone <name>`: the contact's full display line.
pub fn phone(args: &[&str], book: &AddressBook) -> String {
    let name = match args.first() {
        Some(name) => *name,
        None => return MSG_MISSING_NAME.to_string(),
    };

    match book.find(name) {
        Ok(record) => record.to_string(),
        Err(e) => user_message(&e),
    }
}

/// `all`: one line per contact, in book order.
pub fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    let lines: Vec<String> = book.records().map(|r| r.to_string()).collect();
    lines.join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> String {
    let (name, date) = match (args.first(), args.get(1)) {
        (Some(name), Some(date)) => (*name, *date),
        _ => return MSG_BAD_ARGS.to_string(),
    };

    match contact_ops::set_birthday(book, name, date) {
        Ok(()) => "Birthday added.".to_string(),
        Err(e) => user_message(&e),
    }
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> String {
    let name = match args.first() {
        Some(name) => *name,
        None => return MSG_MISSING_NAME.to_string(),
    };

    let record = match book.find(name) {
        Ok(record) => record,
        Err(e) => return user_message(&e),
    };

    match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => format!(
            "Birthday information is not available for {}.",
            record.name()
        ),
    }
}

/// `birthdays`: contacts to congratulate in the next week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = birthday_queries::upcoming_birthdays(book, today);
    if upcoming.is_empty() {
        return "No birthdays upcoming next week.".to_string();
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for item in &upcoming {
        lines.push(format!(
            "{}: {}",
            item.name,
            item.congratulation_date.format(DATE_FORMAT)
        ));
    }
    lines.join("\n")
}

/// Maps the error taxonomy to the three fixed user-facing texts.
fn user_message(err: &AbookError) -> String {
    match err {
        AbookError::MissingArguments { .. }
        | AbookError::InvalidPhone { .. }
        | AbookError::InvalidDateFormat { .. } => MSG_BAD_ARGS.to_string(),
        AbookError::ContactNotFound { .. } | AbookError::PhoneNotFound { .. } => {
            MSG_NOT_FOUND.to_string()
        }
        AbookError::UnknownCommand(_) => "Invalid command.".to_string(),
        other => format!("Error: {}", other),
    }
}
