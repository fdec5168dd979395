//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::memory::MemoryLinkStore;

/// Application state shared across all request handlers.
///
/// Built once by the composition root ([`crate::server::run`] in
/// production, the test state factory in tests), so each construction
/// starts from a fresh, empty link store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkStore>>,
    pub auth_service: Arc<AuthService>,
}
