use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::AppError;

pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

// Exactly 10 digits
// May begin with + signifying a country code
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10}$").expect("phone pattern is valid"));

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(AppError::InvalidPhone(phone.to_string()))
    }
}

pub fn parse_birthday(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
        .map_err(|_| AppError::InvalidBirthday(text.to_string()))
}

pub fn format_birthday(date: &NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}
