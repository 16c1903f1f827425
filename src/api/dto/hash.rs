//! DTOs for the hash endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::OperationRequest;
use crate::utils::hashing::HashAlgorithm;

/// Request to hash a piece of text.
#[derive(Debug, Deserialize, Validate)]
pub struct HashRequest {
    #[validate(
        required(message = "Text is required"),
        length(min = 1, message = "Text is required")
    )]
    pub text: Option<String>,

    /// `bcrypt` adds a bcrypt hash; any other value yields the plain digests.
    pub algorithm: Option<String>,
}

impl HashRequest {
    /// Converts a validated request into an operation request.
    ///
    /// Unrecognised algorithm names fall back to the default digest set.
    pub fn into_operation(self) -> OperationRequest {
        let algorithm = match self.algorithm.as_deref() {
            None => HashAlgorithm::default(),
            Some(name) => name.parse::<HashAlgorithm>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Falling back to default hash set");
                HashAlgorithm::default()
            }),
        };

        OperationRequest::ComputeHash {
            text: self.text.unwrap_or_default(),
            algorithm,
        }
    }
}
