//! Link creation and resolution service.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::shorthand::generate_shorthand;

/// Attempts at generating an unclaimed shorthand before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Owns the validation pipeline for creation requests and the lookup
/// path for redirects. The store is injected, so a fresh store per test
/// run gives full isolation.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
    /// Serializes the availability-check-then-set pair on the creation
    /// path. Without it, two requests racing to claim the same shorthand
    /// could both pass the `has` check and both write.
    write_lock: Mutex<()>,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Validates a creation request and writes the resulting mapping.
    ///
    /// Checks run strictly in this order, and the first failure wins:
    ///
    /// 1. Declared content type must equal `application/json` exactly (415)
    /// 2. `original_url` must be present and non-empty (400)
    /// 3. A supplied shorthand must not already be claimed (409)
    ///
    /// An empty `shorthand` field is treated as absent. When no shorthand
    /// is supplied, a random one is generated and checked against the
    /// store until an unclaimed value is found.
    ///
    /// Returns the effective shorthand on success. No mutation occurs on
    /// any rejection path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnsupportedMediaType`], [`AppError::Validation`],
    /// or [`AppError::Conflict`] per the ordering above, and
    /// [`AppError::Internal`] if shorthand generation exhausts its retry
    /// budget.
    pub async fn create_link(
        &self,
        content_type: Option<&str>,
        original_url: Option<String>,
        shorthand: Option<String>,
    ) -> Result<String, AppError> {
        if content_type != Some("application/json") {
            return Err(AppError::unsupported_media_type("Invalid Content-Type."));
        }

        let original_url = match original_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(AppError::bad_request("No URL provided.")),
        };

        // Availability check and store write form a critical section:
        // uniqueness holds only if no other creation runs between them.
        let _guard = self.write_lock.lock().await;

        let shorthand = match shorthand.filter(|s| !s.is_empty()) {
            Some(supplied) => {
                if self.store.has(&supplied).await {
                    return Err(AppError::conflict(
                        "The provided shorthand is already taken.",
                    ));
                }
                supplied
            }
            None => self.generate_unclaimed_shorthand().await?,
        };

        debug!(%shorthand, "Creating link");

        self.store
            .set(LinkEntry::new(shorthand.clone(), original_url))
            .await;

        Ok(shorthand)
    }

    /// Resolves a shorthand to its stored target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shorthand is unknown.
    pub async fn resolve(&self, shorthand: &str) -> Result<String, AppError> {
        match self.store.get(shorthand).await {
            Some(entry) => Ok(entry.target_url),
            None => Err(AppError::not_found(
                "The provided shorthand was not found.",
            )),
        }
    }

    /// Generates a random shorthand not yet present in the store.
    ///
    /// The generator itself is collision-blind, so each candidate is
    /// checked against the store. Bounded at [`MAX_GENERATION_ATTEMPTS`]
    /// tries; with an 8-character alphanumeric space, exhausting the
    /// budget means something is seriously wrong.
    async fn generate_unclaimed_shorthand(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_shorthand();
            if !self.store.has(&candidate).await {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate an unused shorthand.",
        ))
    }
}
