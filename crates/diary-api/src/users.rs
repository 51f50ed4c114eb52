use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use diary_types::api::{RegisterRequest, SecretCodeRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

/// POST /register — creates a user and hands back the full record,
/// including the secret code used on every later call.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .store
        .register(req.name, req.email_address, req.date_of_birth)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SecretCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.store.get_user(&req.secret_code).await?;
    Ok(Json(user))
}
