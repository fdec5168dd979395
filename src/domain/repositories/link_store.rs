//! Store trait for shorthand-to-URL mappings.

use crate::domain::entities::LinkEntry;
use async_trait::async_trait;

/// Key-value store interface for link mappings.
///
/// The store is a pure mapping primitive: every operation is total and
/// `set` overwrites unconditionally. Uniqueness of shorthands is enforced
/// by the caller with a `has` check before writing, never by the store
/// itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns true iff an entry with exactly this shorthand exists.
    async fn has(&self, shorthand: &str) -> bool;

    /// Returns the entry for a shorthand, or `None` if absent.
    async fn get(&self, shorthand: &str) -> Option<LinkEntry>;

    /// Inserts or overwrites the mapping for the entry's shorthand.
    ///
    /// Callers are responsible for conflict checks beforehand.
    async fn set(&self, entry: LinkEntry);
}
