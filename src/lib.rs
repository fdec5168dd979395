//! # shorthand
//!
//! A small URL shortening service built with Axum.
//!
//! Accepts a long URL and returns a short identifier ("shorthand") that,
//! when requested later, redirects the caller to the original URL.
//! Creation is guarded by JWT Bearer authentication; the link mapping is
//! in-memory and volatile by design.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::LinkEntry`]
//!   entity and the [`domain::repositories::LinkStore`] trait
//! - **Application Layer** ([`application`]) - Credential verification and
//!   the creation/resolution pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## HTTP Surface
//!
//! | Method | Path          | Auth   | Success                  |
//! |--------|---------------|--------|--------------------------|
//! | POST   | `/api/create` | Bearer | `201 {"shorthand": ...}` |
//! | GET    | `/{shorthand}`| none   | `302` redirect           |
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::LinkEntry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryLinkStore;
    pub use crate::state::AppState;
}
