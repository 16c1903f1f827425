//! Handlers for the text transforms: hashing, base64 and the JSON tool.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::base64::Base64Request;
use crate::api::dto::hash::HashRequest;
use crate::api::dto::json_tool::JsonToolRequest;
use crate::api::extract::AppJson;
use crate::domain::output::OperationOutput;
use crate::error::AppError;
use crate::state::AppState;

/// Hashes text with md5, sha256 and sha512, plus bcrypt on request.
///
/// # Endpoint
///
/// `POST /api/hash`
///
/// # Request Body
///
/// ```json
/// { "text": "hello world", "algorithm": "bcrypt" }
/// ```
///
/// # Errors
///
/// Returns 400 if `text` is missing.
pub async fn hash_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<HashRequest>,
) -> Result<OperationOutput, AppError> {
    payload.validate()?;

    state.dispatcher.dispatch(payload.into_operation()).await
}

/// Encodes or decodes base64 text.
///
/// # Endpoint
///
/// `POST /api/base64`
///
/// # Errors
///
/// Returns 400 if `text` is missing, the action is unknown, or the input is
/// not valid base64.
pub async fn base64_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Base64Request>,
) -> Result<OperationOutput, AppError> {
    payload.validate()?;

    state.dispatcher.dispatch(payload.into_operation()?).await
}

/// Validates or pretty-prints JSON.
///
/// # Endpoint
///
/// `POST /api/json`
///
/// Invalid JSON input is reported as `200 { "valid": false, "error": ... }`.
pub async fn json_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<JsonToolRequest>,
) -> Result<OperationOutput, AppError> {
    state.dispatcher.dispatch(payload.into_operation()?).await
}
