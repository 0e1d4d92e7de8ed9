//! Pure functions for mapping user errors to HTTP status codes.

use super::{ErrorKind, UserError};

/// Maps an [`ErrorKind`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Infrastructure` -> 500 (Internal Server Error)
pub fn error_kind_to_status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Infrastructure => 500,
    }
}

/// Maps a [`UserError`] to an HTTP status code.
///
/// # Examples
///
/// ```
/// use birthdays_core::users::{user_error_to_status_code, UserError};
///
/// assert_eq!(user_error_to_status_code(&UserError::NotFound), 404);
/// assert_eq!(user_error_to_status_code(&UserError::UsernameNotLetters), 400);
/// ```
pub fn user_error_to_status_code(error: &UserError) -> u16 {
    error_kind_to_status_code(error.kind())
}
