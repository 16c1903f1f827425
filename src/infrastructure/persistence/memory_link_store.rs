//! In-memory implementation of the link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Process-local short link store.
///
/// A single `RwLock` guards the map; every operation is one map access.
/// Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkStore {
    links: Arc<RwLock<HashMap<String, ShortLink>>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn put(&self, link: ShortLink) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.write().await.insert(link.id.clone(), link))
    }

    async fn increment_clicks(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.get_mut(id).map(|link| {
            link.click_count += 1;
            link.clone()
        }))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().await.len())
    }
}
