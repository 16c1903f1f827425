//! DTOs for the JSON tool endpoint.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::services::OperationRequest;
use crate::error::AppError;
use crate::utils::json_tool::JsonAction;

/// Request to validate or format a JSON document.
///
/// A missing `json` field is treated as empty input and reported as invalid
/// JSON, not as a request error. A non-string value is checked as its own
/// JSON text.
#[derive(Debug, Default, Deserialize)]
pub struct JsonToolRequest {
    pub json: Option<Value>,
    /// `format` (default) or `validate`.
    pub action: Option<String>,
}

impl JsonToolRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown action.
    pub fn into_operation(self) -> Result<OperationRequest, AppError> {
        let action = match self.action.as_deref() {
            None => JsonAction::default(),
            Some(name) => name.parse::<JsonAction>().map_err(|e| {
                AppError::bad_request(e.to_string(), json!({ "action": name }))
            })?,
        };

        Ok(OperationRequest::JsonTool {
            action,
            json: match self.json {
                Some(Value::String(text)) => text,
                Some(other) => other.to_string(),
                None => String::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_format() {
        let req = JsonToolRequest {
            json: Some(json!("{}")),
            action: None,
        };

        assert_eq!(
            req.into_operation().unwrap(),
            OperationRequest::JsonTool {
                action: JsonAction::Format,
                json: "{}".to_string()
            }
        );
    }

    #[test]
    fn test_missing_json_is_empty_input() {
        let req = JsonToolRequest {
            json: None,
            action: Some("validate".to_string()),
        };

        assert_eq!(
            req.into_operation().unwrap(),
            OperationRequest::JsonTool {
                action: JsonAction::Validate,
                json: String::new()
            }
        );
    }

    #[test]
    fn test_non_string_json_is_stringified() {
        let req: JsonToolRequest =
            serde_json::from_value(json!({ "json": { "a": [1, 2] }, "action": "validate" }))
                .unwrap();

        assert_eq!(
            req.into_operation().unwrap(),
            OperationRequest::JsonTool {
                action: JsonAction::Validate,
                json: "{\"a\":[1,2]}".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_action() {
        let req = JsonToolRequest {
            json: Some(json!("{}")),
            action: Some("minify".to_string()),
        };
        assert!(req.into_operation().is_err());
    }
}
