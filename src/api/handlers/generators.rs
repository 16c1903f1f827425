//! Handlers for the parameterless and query-driven generators.

use axum::extract::State;

use crate::api::dto::generators::{PasswordQuery, QrQuery, UuidQuery};
use crate::api::extract::AppQuery;
use crate::application::services::OperationRequest;
use crate::domain::output::OperationOutput;
use crate::error::AppError;
use crate::state::AppState;

/// Generates a batch of UUIDs.
///
/// # Endpoint
///
/// `GET /api/uuid?count=N`
///
/// # Response
///
/// ```json
/// { "uuids": ["6f1c..."], "timestamp": "2024-01-01T12:00:00.000Z" }
/// ```
pub async fn uuid_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UuidQuery>,
) -> Result<OperationOutput, AppError> {
    state.dispatcher.dispatch(query.into_operation()).await
}

/// Generates a random password with a strength label.
///
/// # Endpoint
///
/// `GET /api/password?length=N`
///
/// # Response
///
/// ```json
/// { "password": "aB3$...", "length": 12, "strength": "Strong" }
/// ```
pub async fn password_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PasswordQuery>,
) -> Result<OperationOutput, AppError> {
    state.dispatcher.dispatch(query.into_operation()).await
}

/// Renders a QR code as a PNG image.
///
/// # Endpoint
///
/// `GET /api/qrcode?text=...&size=N`
///
/// Responds with `Content-Type: image/png`.
///
/// # Errors
///
/// Returns 500 if the text cannot be encoded.
pub async fn qrcode_handler(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<QrQuery>,
) -> Result<OperationOutput, AppError> {
    state.dispatcher.dispatch(query.into_operation()).await
}

/// Describes the current instant in several formats.
///
/// # Endpoint
///
/// `GET /api/time`
pub async fn time_handler(State(state): State<AppState>) -> Result<OperationOutput, AppError> {
    state.dispatcher.dispatch(OperationRequest::ConvertTime).await
}
