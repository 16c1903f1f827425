//! Store trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short links.
///
/// Keeps the only piece of shared mutable state behind one seam so the
/// backing store can be swapped without touching the handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Finds a link by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    async fn get(&self, id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Inserts a link, replacing any existing entry with the same id.
    ///
    /// Returns the replaced link, if any. Ids are not checked for uniqueness.
    async fn put(&self, link: ShortLink) -> Result<Option<ShortLink>, AppError>;

    /// Increments the click count of a link and returns the updated link.
    ///
    /// Returns `Ok(None)` if no link has this id.
    async fn increment_clicks(&self, id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
