//! Field-level constraints for player records.
//!
//! Each predicate checks one field in isolation. Creation requires every
//! field to pass; an update checks only the fields it supplies.

use chrono::{DateTime, Utc};

use crate::entities::{Profession, Race};
use crate::error::DomainError;

/// Maximum length for a player name
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum length for a player title
pub const MAX_TITLE_LENGTH: usize = 30;

/// Inclusive upper bound on experience
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// 2000-01-01T00:00:00Z in epoch milliseconds (exclusive lower bound for birthdays)
pub const BIRTHDAY_LOWER_BOUND_MILLIS: i64 = 946_684_800_000;

/// 3000-01-01T00:00:00Z in epoch milliseconds (exclusive upper bound for birthdays)
pub const BIRTHDAY_UPPER_BOUND_MILLIS: i64 = 32_503_680_000_000;

pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=MAX_NAME_LENGTH).contains(&len)
}

pub fn is_valid_title(title: &str) -> bool {
    let len = title.chars().count();
    (1..=MAX_TITLE_LENGTH).contains(&len)
}

pub fn is_valid_race_and_profession(race: Option<Race>, profession: Option<Profession>) -> bool {
    race.is_some() && profession.is_some()
}

pub fn is_valid_experience(experience: i32) -> bool {
    (0..=MAX_EXPERIENCE).contains(&experience)
}

/// Birthdays must fall strictly inside the years 2000..3000, measured in UTC.
pub fn is_valid_birthday(birthday: DateTime<Utc>) -> bool {
    let millis = birthday.timestamp_millis();
    millis > BIRTHDAY_LOWER_BOUND_MILLIS && millis < BIRTHDAY_UPPER_BOUND_MILLIS
}

pub(crate) fn check_name(name: &str) -> Result<(), DomainError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "name must be 1 to {MAX_NAME_LENGTH} characters"
        )))
    }
}

pub(crate) fn check_title(title: &str) -> Result<(), DomainError> {
    if is_valid_title(title) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "title must be 1 to {MAX_TITLE_LENGTH} characters"
        )))
    }
}

pub(crate) fn check_experience(experience: i32) -> Result<(), DomainError> {
    if is_valid_experience(experience) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "experience must be between 0 and {MAX_EXPERIENCE}"
        )))
    }
}

pub(crate) fn check_birthday(birthday: DateTime<Utc>) -> Result<(), DomainError> {
    if is_valid_birthday(birthday) {
        Ok(())
    } else {
        Err(DomainError::validation(
            "birthday must be after 2000-01-01 and before 3000-01-01",
        ))
    }
}
