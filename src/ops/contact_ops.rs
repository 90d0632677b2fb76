use crate::error::AbookResult;
use crate::model::{AddressBook, Record};

/// What `add_contact` did: created a new record or appended a phone to
/// an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    PhoneAppended,
}

/// Adds a phone to the named contact, creating the record the first
/// time the name is seen. The phone is validated before a new record is
/// inserted, so a bad number never leaves an empty contact behind.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> AbookResult<AddOutcome> {
    if book.contains(name) {
        book.find_mut(name)?.add_phone(phone)?;
        return Ok(AddOutcome::PhoneAppended);
    }

    let mut record = Record::new(name.to_string());
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(AddOutcome::Created)
}

/// Replaces `old_phone` with `new_phone` on the named contact, keeping
/// its position in the phone list.
pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> AbookResult<()> {
    book.find_mut(name)?.edit_phone(old_phone, new_phone)
}

/// Sets or replaces the named contact's birthday.
pub fn set_birthday(book: &mut AddressBook, name: &str, date: &str) -> AbookResult<()> {
    book.find_mut(name)?.add_birthday(date)
}
