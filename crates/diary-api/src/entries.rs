use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use diary_types::DATE_FORMAT;
use diary_types::api::{
    AddEntryRequest, DeleteEntryRequest, SecretCodeRequest, ShowEntryRequest, ShowEntryResponse,
    UpdateEntryRequest,
};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

/// GET /showDiaryOfMonth — entries dated in the server's current month.
pub async fn show_diary_of_month(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SecretCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let today = state.clock.today();
    let entries = state
        .store
        .entries_in_month(&req.secret_code, today.year(), today.month())
        .await?;

    Ok(Json(entries))
}

/// POST /addEntry
pub async fn add_entry(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddEntryRequest>,
) -> Result<StatusCode, ApiError> {
    let now = state.clock.now();
    let date = req.date.unwrap_or(now.date());

    let log = state
        .store
        .add_log(&req.secret_code, date, req.log.title, req.log.content, now)
        .await?;

    debug!("addEntry: log {} filed under {}", log.id, date);
    Ok(StatusCode::OK)
}

/// PUT /updateEntry — full overwrite of a log in one day's entry.
pub async fn update_entry(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateEntryRequest>,
) -> Result<StatusCode, ApiError> {
    let date = req.date.unwrap_or_else(|| state.clock.today());
    state
        .store
        .update_log(&req.secret_code, date, req.log)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /deleteEntry
pub async fn delete_entry(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteEntryRequest>,
) -> Result<StatusCode, ApiError> {
    let date = req.date.unwrap_or_else(|| state.clock.today());
    state
        .store
        .delete_log(&req.secret_code, date, &req.id)
        .await?;

    Ok(StatusCode::OK)
}

/// GET /showEntry — `{"logs": [...]}`, empty when nothing was written that day.
pub async fn show_entry(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ShowEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // exact string match: chrono would also accept "2024-6-5"
    let date = NaiveDate::parse_from_str(&req.date, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == req.date);
    let logs = state.store.logs_on(&req.secret_code, date).await?;

    Ok(Json(ShowEntryResponse { logs }))
}
