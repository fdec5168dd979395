//! In-memory implementation of the link store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkStore;

/// Volatile, process-local link store backed by a `HashMap`.
///
/// All mappings are lost on process termination; there is no persistence
/// layer. The map is guarded by an async `RwLock`, so concurrent redirects
/// read without contending with each other.
///
/// Note: the lock only makes individual operations atomic. The
/// check-then-set sequence on the creation path spans two calls and is
/// serialized by [`crate::application::services::LinkService`].
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, LinkEntry>>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn has(&self, shorthand: &str) -> bool {
        self.links.read().await.contains_key(shorthand)
    }

    async fn get(&self, shorthand: &str) -> Option<LinkEntry> {
        self.links.read().await.get(shorthand).cloned()
    }

    async fn set(&self, entry: LinkEntry) {
        self.links
            .write()
            .await
            .insert(entry.shorthand.clone(), entry);
    }
}
