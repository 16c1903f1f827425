//! Query parameters for the generator endpoints (UUID, password, QR code).
//!
//! Numeric values arrive as raw strings and are coerced rather than
//! validated, so `?count=abc` falls back to the default instead of failing.

use serde::Deserialize;

use crate::application::services::OperationRequest;
use crate::utils::coerce::coerce_or;
use crate::utils::password::DEFAULT_PASSWORD_LENGTH;
use crate::utils::qr::{DEFAULT_QR_SIZE, DEFAULT_QR_TEXT};

/// `GET /api/uuid?count=N`
#[derive(Debug, Default, Deserialize)]
pub struct UuidQuery {
    pub count: Option<String>,
}

impl UuidQuery {
    pub fn into_operation(self) -> OperationRequest {
        OperationRequest::GenerateIds {
            count: coerce_or(self.count.as_deref(), 1),
        }
    }
}

/// `GET /api/password?length=N`
#[derive(Debug, Default, Deserialize)]
pub struct PasswordQuery {
    pub length: Option<String>,
}

impl PasswordQuery {
    pub fn into_operation(self) -> OperationRequest {
        OperationRequest::GeneratePassword {
            length: coerce_or(self.length.as_deref(), DEFAULT_PASSWORD_LENGTH),
        }
    }
}

/// `GET /api/qrcode?text=...&size=N`
#[derive(Debug, Default, Deserialize)]
pub struct QrQuery {
    pub text: Option<String>,
    pub size: Option<String>,
}

impl QrQuery {
    pub fn into_operation(self) -> OperationRequest {
        OperationRequest::RenderQr {
            text: self.text.unwrap_or_else(|| DEFAULT_QR_TEXT.to_string()),
            size: coerce_or(self.size.as_deref(), i64::from(DEFAULT_QR_SIZE)),
        }
    }
}
