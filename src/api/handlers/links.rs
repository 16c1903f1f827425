//! Handlers for the in-memory URL shortener.

use axum::extract::{Path, State};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::extract::AppJson;
use crate::application::services::OperationRequest;
use crate::domain::output::OperationOutput;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Response
///
/// ```json
/// {
///   "original": "https://example.com",
///   "shortUrl": "http://localhost:3000/api/redirect/k3x9qa",
///   "shortId": "k3x9qa",
///   "analytics": "k3x9qa/stats"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `url` is missing.
pub async fn shorten_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ShortenRequest>,
) -> Result<OperationOutput, AppError> {
    payload.validate()?;

    state.dispatcher.dispatch(payload.into_operation()).await
}

/// Redirects a short id to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /api/redirect/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<OperationOutput, AppError> {
    state
        .dispatcher
        .dispatch(OperationRequest::Resolve { id })
        .await
}

/// Returns a short link with its click count.
///
/// # Endpoint
///
/// `GET /api/redirect/{id}/stats`
///
/// # Errors
///
/// Returns 404 if the id is unknown.
pub async fn link_stats_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<OperationOutput, AppError> {
    state
        .dispatcher
        .dispatch(OperationRequest::LinkStats { id })
        .await
}
