//! HTTP request handlers for API endpoints.
//!
//! Handlers are thin: they extract and validate the request, build an
//! [`OperationRequest`](crate::application::services::OperationRequest) and
//! hand it to the dispatcher.

pub mod generators;
pub mod health;
pub mod links;
pub mod transforms;

pub use generators::{password_handler, qrcode_handler, time_handler, uuid_handler};
pub use health::health_handler;
pub use links::{link_stats_handler, redirect_handler, shorten_handler};
pub use transforms::{base64_handler, hash_handler, json_handler};
