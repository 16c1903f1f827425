//! Short link entity representing an in-memory URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with click analytics.
///
/// Lives only in process memory; there is no deletion path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: String,
    pub target_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link with a zero click count, stamped with the current time.
    pub fn new(id: String, target_url: String) -> Self {
        Self {
            id,
            target_url,
            click_count: 0,
            created_at: Utc::now(),
        }
    }
}
