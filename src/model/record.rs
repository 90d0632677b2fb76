use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AbookError, AbookResult};

use super::field::{Birthday, Phone};

/// One contact: an immutable name, insertion-ordered phones, and an
/// optional birthday. Duplicate phone numbers are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: String) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends a phone number.
    pub fn add_phone(&mut self, number: &str) -> AbookResult<()> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone matching `number`.
    pub fn remove_phone(&mut self, number: &str) -> AbookResult<()> {
        let pos = self.position_of(number)?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Returns the first phone matching `number`.
    pub fn find_phone(&self, number: &str) -> AbookResult<&Phone> {
        let pos = self.position_of(number)?;
        Ok(&self.phones[pos])
    }

    /// Replaces the phone equal to `old_number` with `new_number`,
    /// keeping its position in the sequence. The new number is
    /// validated before the old one is touched.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> AbookResult<()> {
        let pos = self.position_of(old_number)?;
        let phone = Phone::new(new_number)?;
        self.phones[pos] = phone;
        Ok(())
    }

    /// Sets or replaces the birthday. Last write wins.
    pub fn add_birthday(&mut self, value: &str) -> AbookResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> AbookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == number)
            .ok_or_else(|| AbookError::PhoneNotFound {
                number: number.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
