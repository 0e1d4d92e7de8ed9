//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use birthdays_core::users::User;
use chrono::NaiveDate;
use rusqlite::Row;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a SQLite row to a User.
///
/// Expected columns: username, date_of_birth
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let username: String = row.get(0)?;
    let date_of_birth: String = row.get(1)?;

    Ok(User {
        username,
        date_of_birth: parse_date(1, &date_of_birth)?,
    })
}

/// Parse a date from YYYY-MM-DD string.
fn parse_date(column: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a date as YYYY-MM-DD string.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sql: &str) -> rusqlite::Result<User> {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.query_row(sql, [], row_to_user)
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(905, 1, 2).unwrap();
        assert_eq!(format_date(&date), "0905-01-02");
    }

    #[test]
    fn test_row_to_user() {
        let user = query("SELECT 'apple', '2000-01-02'").unwrap();
        assert_eq!(
            user,
            User::new("apple", NaiveDate::from_ymd_opt(2000, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_row_to_user_bad_date() {
        let result = query("SELECT 'apple', 'yesterday'");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(1, _, _))
        ));
    }

    #[test]
    fn test_row_to_user_null_date() {
        let result = query("SELECT 'apple', NULL");
        assert!(result.is_err());
    }
}
