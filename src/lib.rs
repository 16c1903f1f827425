//! # Dev Utility Hub
//!
//! A small web service bundling everyday developer utilities behind one
//! HTTP API, plus a browser page that calls them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the link store trait and result types
//! - **Application Layer** ([`application`]) - Operation dispatch and the utility / link services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Index page
//!
//! ## Operations
//!
//! UUID generation, md5/sha256/sha512/bcrypt hashing, base64 transcoding,
//! QR code PNGs, time formatting, password generation, JSON validation and
//! formatting, and an in-memory URL shortener with click counts.
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//! curl 'http://localhost:3000/api/uuid?count=3'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        Dispatcher, Limits, LinkService, OperationRequest, UtilityService,
    };
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::output::OperationOutput;
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkStore;
    pub use crate::state::AppState;
}
