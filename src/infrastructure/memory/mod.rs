//! In-memory storage backend.

pub mod memory_link_store;

pub use memory_link_store::MemoryLinkStore;
