//! HTTP server initialization and runtime setup.
//!
//! The composition root: builds the store, services, and router, then
//! runs the Axum server.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::infrastructure::memory::MemoryLinkStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The link store starts empty on every launch; mappings live only as
/// long as the process.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address fails to parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryLinkStore::new());
    let link_service = Arc::new(LinkService::new(store));
    let auth_service = Arc::new(AuthService::new(&config.jwt_secret));

    let state = AppState {
        link_service,
        auth_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
