use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user and their date of birth.
///
/// The username is the identity of the record and never changes; upserts
/// only replace `date_of_birth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Calendar date, no time of day and no timezone.
    pub date_of_birth: NaiveDate,
}

impl User {
    /// Creates a new user record.
    pub fn new(username: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            username: username.into(),
            date_of_birth,
        }
    }
}
