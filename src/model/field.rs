use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AbookError, AbookResult};

/// A validated phone number: exactly 10 decimal digits.
///
/// Serde round-trips through the raw string so a hand-edited snapshot
/// with a bad number is rejected at load time, not stored invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> AbookResult<Self> {
        if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AbookError::InvalidPhone {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday: a calendar date constructed only from `DD.MM.YYYY` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

/// Rendering format for birthdays and congratulation dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

impl Birthday {
    pub fn new(value: &str) -> AbookResult<Self> {
        // The length check rejects 1-digit day/month forms that chrono
        // would otherwise accept, e.g. "1.6.2024".
        if value.len() != 10 {
            return Err(AbookError::InvalidDateFormat {
                value: value.to_string(),
            });
        }
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
            AbookError::InvalidDateFormat {
                value: value.to_string(),
            }
        })?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
