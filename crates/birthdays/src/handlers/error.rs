use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use birthdays_core::users::{user_error_to_status_code, ErrorKind, ErrorResponse, UserError};

/// Handler error, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct AppError(pub UserError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = StatusCode::from_u16(user_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0.kind() {
            ErrorKind::Infrastructure => {
                tracing::error!(status = %status_code, error = %self.0, "API error")
            }
            ErrorKind::Validation | ErrorKind::NotFound => {
                tracing::debug!(status = %status_code, error = %self.0, "API error")
            }
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}
