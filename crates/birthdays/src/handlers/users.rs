//! Handlers for `/hello/{username}`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use birthdays_core::users::{ReadUserResponse, UpsertUserRequest, UserError};

use crate::{handlers::AppError, state::AppState};

/// Save or update a user's date of birth (PUT /hello/{username}).
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
/// Returns 204 with an empty body.
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let payload: UpsertUserRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(%username, error = %err, "Rejected request body");
        UserError::InvalidBody
    })?;

    state
        .user_service
        .upsert(&username, &payload.date_of_birth)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Greet a user (GET /hello/{username}).
pub async fn read_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ReadUserResponse>, AppError> {
    let message = state.user_service.read(&username).await?;
    Ok(Json(ReadUserResponse { message }))
}
