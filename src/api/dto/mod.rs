//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are deserialized with Serde, presence-checked with
//! validator, then converted into an
//! [`OperationRequest`](crate::application::services::OperationRequest).
//! Response shapes live in [`crate::domain::output`].

pub mod base64;
pub mod generators;
pub mod hash;
pub mod health;
pub mod json_tool;
pub mod shorten;
