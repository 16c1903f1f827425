//! Browser-facing layer.
//!
//! Serves the index page (Askama template) whose presenter script calls the
//! API and renders results into cards and a shared output log.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
