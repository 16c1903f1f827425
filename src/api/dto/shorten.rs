//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::OperationRequest;

/// Request to shorten a URL.
///
/// Only presence is checked; the URL is stored exactly as given.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}

impl ShortenRequest {
    pub fn into_operation(self) -> OperationRequest {
        OperationRequest::Shorten {
            url: self.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_required() {
        assert!(ShortenRequest { url: None }.validate().is_err());
        assert!(
            ShortenRequest {
                url: Some(String::new())
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_any_non_empty_url_accepted() {
        assert!(
            ShortenRequest {
                url: Some("not even a url".to_string())
            }
            .validate()
            .is_ok()
        );
    }
}
