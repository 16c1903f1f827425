//! DTOs for the base64 endpoint.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::application::services::OperationRequest;
use crate::error::AppError;
use crate::utils::base64_codec::{Base64Action, UnknownAction};

/// Request to encode or decode text.
#[derive(Debug, Deserialize, Validate)]
pub struct Base64Request {
    /// `encode` or `decode`.
    pub action: Option<String>,

    #[validate(
        required(message = "Text is required"),
        length(min = 1, message = "Text is required")
    )]
    pub text: Option<String>,
}

impl Base64Request {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the action is missing or unknown.
    pub fn into_operation(self) -> Result<OperationRequest, AppError> {
        let action: Base64Action = self
            .action
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e: UnknownAction| {
                AppError::bad_request(e.to_string(), json!({ "action": self.action }))
            })?;

        Ok(OperationRequest::Base64 {
            action,
            text: self.text.unwrap_or_default(),
        })
    }
}
