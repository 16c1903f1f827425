//! Result types produced by the operations.
//!
//! [`OperationOutput`] is the envelope every operation returns. JSON variants
//! serialize to their own shape (the enum is untagged), the QR variant becomes
//! a PNG body and the resolve variant becomes a `302 Found`.

use axum::{
    Json,
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use crate::utils::location::encode_location;

#[derive(Debug, Clone, Serialize)]
pub struct UuidBatch {
    pub uuids: Vec<String>,
    pub timestamp: String,
}

/// Hex digests for the default algorithm set, plus bcrypt on request.
#[derive(Debug, Clone, Serialize)]
pub struct HashDigests {
    pub md5: String,
    pub sha256: String,
    pub sha512: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcrypt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashResult {
    pub original: String,
    pub hashes: HashDigests,
}

#[derive(Debug, Clone, Serialize)]
pub struct Base64Result {
    pub action: String,
    pub original: String,
    pub result: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeResult {
    pub unix: i64,
    pub iso: String,
    pub utc: String,
    pub local: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordResult {
    pub password: String,
    pub length: i64,
    pub strength: &'static str,
}

/// Outcome of the JSON tool. Parse failures are a normal result, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonToolResult {
    Validated {
        valid: bool,
        message: String,
    },
    Formatted {
        original: String,
        formatted: String,
        valid: bool,
    },
    Invalid {
        valid: bool,
        error: String,
    },
}

impl JsonToolResult {
    pub fn invalid(error: impl Into<String>) -> Self {
        JsonToolResult::Invalid {
            valid: false,
            error: error.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            JsonToolResult::Validated { valid, .. }
            | JsonToolResult::Formatted { valid, .. }
            | JsonToolResult::Invalid { valid, .. } => *valid,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub original: String,
    pub short_url: String,
    pub short_id: String,
    pub analytics: String,
}

/// Public view of a stored [`ShortLink`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub id: String,
    pub target_url: String,
    pub click_count: u64,
    pub created_at: String,
}

impl From<ShortLink> for LinkStats {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            target_url: link.target_url,
            click_count: link.click_count,
            created_at: link.created_at.to_rfc3339(),
        }
    }
}

/// Envelope returned by every operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Uuids(UuidBatch),
    Hash(HashResult),
    Base64(Base64Result),
    #[serde(skip)]
    QrImage(Vec<u8>),
    Time(TimeResult),
    Password(PasswordResult),
    Json(JsonToolResult),
    Shortened(ShortenResult),
    #[serde(skip)]
    Redirect(String),
    LinkStats(LinkStats),
}

impl IntoResponse for OperationOutput {
    fn into_response(self) -> Response {
        match self {
            OperationOutput::QrImage(png) => {
                ([(header::CONTENT_TYPE, "image/png")], png).into_response()
            }
            OperationOutput::Redirect(location) => Response::builder()
                .status(StatusCode::FOUND)
                .header(header::LOCATION, encode_location(&location))
                .body(Body::empty())
                .unwrap_or_else(|e| {
                    AppError::internal(
                        "Redirect failed",
                        json!({ "location": location, "reason": e.to_string() }),
                    )
                    .into_response()
                }),
            other => Json(other).into_response(),
        }
    }
}
