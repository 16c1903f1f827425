//! JSON validation and pretty-printing.

use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonAction {
    #[default]
    Format,
    Validate,
}

#[derive(Debug, thiserror::Error)]
#[error("Action must be format or validate")]
pub struct UnknownJsonAction;

impl FromStr for JsonAction {
    type Err = UnknownJsonAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "format" => Ok(Self::Format),
            "validate" => Ok(Self::Validate),
            _ => Err(UnknownJsonAction),
        }
    }
}

/// Checks that `input` is a single well-formed JSON value.
pub fn validate(input: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<Value>(input).map(|_| ())
}

/// Re-serializes `input` with two-space indentation, keeping key order.
pub fn pretty(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string_pretty(&value)
}
