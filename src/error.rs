use thiserror::Error;

#[derive(Debug, Error)]
pub enum AbookError {
    #[error("phone number must be exactly 10 digits: '{value}'")]
    InvalidPhone { value: String },

    #[error("invalid date format: '{value}' (use DD.MM.YYYY)")]
    InvalidDateFormat { value: String },

    #[error("phone number not found: {number}")]
    PhoneNotFound { number: String },

    #[error("contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("missing argument(s) for '{command}'")]
    MissingArguments { command: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AbookResult<T> = Result<T, AbookError>;
