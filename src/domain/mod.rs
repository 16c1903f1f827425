//! Domain layer containing entities, storage contracts and result types.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::ShortLink`])
//! - [`repositories`] - Storage trait definitions ([`repositories::LinkStore`])
//! - [`operation`] - Catalog of named operations
//! - [`output`] - Per-operation result types and the [`output::OperationOutput`] envelope
//!
//! The domain layer has no dependency on infrastructure; the store
//! implementation is injected through the [`repositories::LinkStore`] trait.

pub mod entities;
pub mod operation;
pub mod output;
pub mod repositories;
