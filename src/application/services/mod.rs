//! Business logic services for the application layer.

pub mod dispatcher;
pub mod link_service;
pub mod utility_service;

pub use dispatcher::{Dispatcher, OperationRequest};
pub use link_service::LinkService;
pub use utility_service::{Limits, UtilityService};
