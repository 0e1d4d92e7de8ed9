//! Wire types for the `/hello/{username}` endpoints.

use serde::{Deserialize, Serialize};

/// Body of `PUT /hello/{username}`.
///
/// The date is kept as a string so that malformed values surface as a
/// validation error rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertUserRequest {
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

/// Body of a successful `GET /hello/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadUserResponse {
    pub message: String,
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
