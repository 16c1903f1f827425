//! API route configuration.

use crate::api::handlers::{
    base64_handler, hash_handler, json_handler, link_stats_handler, password_handler,
    qrcode_handler, redirect_handler, shorten_handler, time_handler, uuid_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All utility routes. No authentication.
///
/// # Endpoints
///
/// - `GET  /uuid`                 - Generate UUIDs
/// - `POST /hash`                 - Hash text
/// - `POST /base64`               - Encode / decode base64
/// - `GET  /qrcode`               - QR code PNG
/// - `GET  /time`                 - Current time in several formats
/// - `GET  /password`             - Random password
/// - `POST /json`                 - Validate / format JSON
/// - `POST /shorten`              - Create a short link
/// - `GET  /redirect/{id}`        - Follow a short link
/// - `GET  /redirect/{id}/stats`  - Short link click count
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/uuid", get(uuid_handler))
        .route("/hash", post(hash_handler))
        .route("/base64", post(base64_handler))
        .route("/qrcode", get(qrcode_handler))
        .route("/time", get(time_handler))
        .route("/password", get(password_handler))
        .route("/json", post(json_handler))
        .route("/shorten", post(shorten_handler))
        .route("/redirect/{id}", get(redirect_handler))
        .route("/redirect/{id}/stats", get(link_stats_handler))
}
