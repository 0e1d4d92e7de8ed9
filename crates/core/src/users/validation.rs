//! Input validation for usernames and dates of birth.
//!
//! Validation runs before any I/O and short-circuits on the first failure.

use chrono::{Datelike, NaiveDate};

use super::UserError;

/// Oldest accepted age, in calendar years.
pub const MAX_AGE_YEARS: i32 = 150;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a username: non-empty and letters only.
///
/// "Letters" is the Unicode alphabetic property, so `"zoë"` is accepted.
///
/// # Examples
///
/// ```
/// use birthdays_core::users::{validate_username, UserError};
///
/// assert!(validate_username("apple").is_ok());
/// assert_eq!(validate_username(""), Err(UserError::UsernameEmpty));
/// assert_eq!(validate_username("123aaa"), Err(UserError::UsernameNotLetters));
/// ```
pub fn validate_username(username: &str) -> Result<(), UserError> {
    if username.is_empty() {
        return Err(UserError::UsernameEmpty);
    }
    if !username.chars().all(char::is_alphabetic) {
        return Err(UserError::UsernameNotLetters);
    }
    Ok(())
}

/// Parses and validates a `YYYY-MM-DD` date of birth against `today`.
///
/// Rejects, in order:
/// - anything that is not exactly `YYYY-MM-DD` or is not a real date
///   (`2013-02-29`, `2000-13-02`, `abcd-01-02`)
/// - dates after `today`
/// - dates more than [`MAX_AGE_YEARS`] calendar years before `today`
pub fn parse_date_of_birth(raw: &str, today: NaiveDate) -> Result<NaiveDate, UserError> {
    if !is_iso_date_shape(raw) {
        return Err(UserError::DateOfBirthInvalid);
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| UserError::DateOfBirthInvalid)?;

    if date > today {
        return Err(UserError::DateOfBirthInFuture);
    }
    if today.year() - date.year() > MAX_AGE_YEARS {
        return Err(UserError::DateOfBirthTooOld);
    }

    Ok(date)
}

/// chrono accepts single-digit months and days; the API does not.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
