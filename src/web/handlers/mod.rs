//! HTML template rendering handlers.

mod index;

pub use index::{FeatureCard, IndexTemplate, index_handler};
