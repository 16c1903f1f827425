//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{Dispatcher, Limits, LinkService, UtilityService};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::MemoryLinkStore;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Builds the state around a given link store.
    pub fn with_store(store: Arc<dyn LinkStore>, base_url: &str, limits: Limits) -> Self {
        let links = Arc::new(LinkService::new(store, base_url));
        let utilities = UtilityService::new(limits);

        Self::new(Arc::new(Dispatcher::new(utilities, links)))
    }

    /// Builds the state with a fresh in-memory link store.
    pub fn in_memory(base_url: &str, limits: Limits) -> Self {
        Self::with_store(Arc::new(MemoryLinkStore::new()), base_url, limits)
    }
}
