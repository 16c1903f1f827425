//! Short link creation, resolution and statistics.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::ShortLink;
use crate::domain::output::{LinkStats, ShortenResult};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::id_generator::generate_short_id;

/// Service for creating and resolving short links.
///
/// Ids are random and not checked for uniqueness: a colliding id replaces the
/// previous link. The overwrite is logged but not prevented.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every generated short URL (e.g. `http://localhost:3000`).
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    /// Stores `url` under a fresh id and returns the public short URL.
    ///
    /// The URL is only checked for presence by the caller; it is stored as given.
    pub async fn shorten(&self, url: String) -> Result<ShortenResult, AppError> {
        let id = generate_short_id();
        let link = ShortLink::new(id.clone(), url.clone());

        if let Some(replaced) = self.store.put(link).await? {
            warn!(
                id = %id,
                previous = %replaced.target_url,
                "Short id collision, previous link overwritten"
            );
        }
        info!(id = %id, "Short link created");

        Ok(ShortenResult {
            original: url,
            short_url: self.short_url(&id),
            analytics: format!("{}/stats", id),
            short_id: id,
        })
    }

    /// Returns the target URL for `id`, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let link = self
            .store
            .increment_clicks(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        debug!(id = %id, clicks = link.click_count, "Short link resolved");
        Ok(link.target_url)
    }

    /// Returns the stored link without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn stats(&self, id: &str) -> Result<LinkStats, AppError> {
        self.store
            .get(id)
            .await?
            .map(LinkStats::from)
            .ok_or_else(|| not_found(id))
    }

    /// Number of stored links.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.store.count().await
    }

    /// Builds the redirect URL for an id.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/api/redirect/{}", self.base_url.trim_end_matches('/'), id)
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;

    fn service(store: MockLinkStore) -> LinkService {
        LinkService::new(Arc::new(store), "http://localhost:3000/")
    }

    #[tokio::test]
    async fn test_shorten_stores_link() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_put()
            .withf(|link| link.target_url == "https://example.com" && link.click_count == 0)
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_store)
            .shorten("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(result.original, "https://example.com");
        assert_eq!(result.short_id.len(), 6);
        assert_eq!(
            result.short_url,
            format!("http://localhost:3000/api/redirect/{}", result.short_id)
        );
        assert_eq!(result.analytics, format!("{}/stats", result.short_id));
    }

    #[tokio::test]
    async fn test_shorten_collision_overwrites() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_put().times(1).returning(|link| {
            Ok(Some(ShortLink::new(link.id, "https://old.com".to_string())))
        });

        let result = service(mock_store).shorten("https://new.com".to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_increments() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_increment_clicks()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|id| {
                let mut link = ShortLink::new(id.to_string(), "https://example.com".to_string());
                link.click_count = 1;
                Ok(Some(link))
            });

        let url = service(mock_store).resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_store).resolve("doesnotexist").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_does_not_count_visit() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_increment_clicks().times(0);
        mock_store.expect_get().times(1).returning(|id| {
            Ok(Some(ShortLink::new(
                id.to_string(),
                "https://example.com".to_string(),
            )))
        });

        let stats = service(mock_store).stats("abc123").await.unwrap();

        assert_eq!(stats.id, "abc123");
        assert_eq!(stats.click_count, 0);
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let svc = service(MockLinkStore::new());
        assert_eq!(svc.short_url("x1"), "http://localhost:3000/api/redirect/x1");
    }
}
