use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

/// Calendar day in `YYYY-MM-DD` form, zero padded.
pub fn check_date(date: &str) -> Result<(), AppError> {
    let bad = || AppError::bad("date must be YYYY-MM-DD");
    // chrono accepts unpadded months and days
    if date.len() != 10 {
        return Err(bad());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| bad())
}

/// Non-blank required text field.
pub fn check_text(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad(format!("{field} is required")));
    }
    Ok(())
}
