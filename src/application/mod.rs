//! Application layer services.
//!
//! Services sit between the HTTP handlers and the domain: handlers turn
//! requests into [`services::OperationRequest`]s and the
//! [`services::Dispatcher`] runs them.
//!
//! # Available Services
//!
//! - [`services::dispatcher::Dispatcher`] - Routes operation requests to services
//! - [`services::utility_service::UtilityService`] - Stateless utilities
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
