use thiserror::Error;

/// The three kinds of failure a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was rejected before any I/O. Caller-fixable.
    Validation,
    /// The username is not in the durable store.
    NotFound,
    /// A durable table or cache backend failed.
    Infrastructure,
}

/// Errors returned by the user service.
///
/// The display strings are part of the HTTP contract: they are returned
/// verbatim in the `error` field of failed responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("username cannot be empty")]
    UsernameEmpty,
    #[error("username contains non letters")]
    UsernameNotLetters,
    #[error("invalid date of birth")]
    DateOfBirthInvalid,
    #[error("a date of birth in the future is used")]
    DateOfBirthInFuture,
    #[error("date of birth is too old")]
    DateOfBirthTooOld,
    #[error("invalid JSON body")]
    InvalidBody,
    #[error("username not found")]
    NotFound,
    #[error("unexpected error")]
    Unexpected,
}

impl UserError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::UsernameEmpty
            | UserError::UsernameNotLetters
            | UserError::DateOfBirthInvalid
            | UserError::DateOfBirthInFuture
            | UserError::DateOfBirthTooOld
            | UserError::InvalidBody => ErrorKind::Validation,
            UserError::NotFound => ErrorKind::NotFound,
            UserError::Unexpected => ErrorKind::Infrastructure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_display() {
        assert_eq!(
            UserError::UsernameNotLetters.to_string(),
            "username contains non letters"
        );
        assert_eq!(
            UserError::DateOfBirthInFuture.to_string(),
            "a date of birth in the future is used"
        );
        assert_eq!(UserError::NotFound.to_string(), "username not found");
        assert_eq!(UserError::Unexpected.to_string(), "unexpected error");
    }

    #[test]
    fn test_validation_errors_are_validation_kind() {
        for err in [
            UserError::UsernameEmpty,
            UserError::UsernameNotLetters,
            UserError::DateOfBirthInvalid,
            UserError::DateOfBirthInFuture,
            UserError::DateOfBirthTooOld,
            UserError::InvalidBody,
        ] {
            assert_eq!(err.kind(), ErrorKind::Validation, "{err}");
        }
    }

    #[test]
    fn test_not_found_and_unexpected_kinds() {
        assert_eq!(UserError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(UserError::Unexpected.kind(), ErrorKind::Infrastructure);
    }
}
