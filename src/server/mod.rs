//! HTTP session relay service
//!
//! Serves the auth cookie endpoints plus read-only catalog routes backed
//! by the seeded data.

mod error;
pub mod routes;

pub use error::RelayError;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;

use crate::config::{Config, RunEnv};

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub env: RunEnv,
}

/// Build the relay router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/auth/token",
            post(routes::token_post)
                .get(routes::token_get)
                .delete(routes::token_delete),
        )
        .route("/api/auth/refresh", post(routes::refresh_post))
        .route("/api/offers", get(routes::offers_get))
        .route("/api/freelancers", get(routes::freelancers_get))
        .route("/api/disputes", get(routes::disputes_get))
        .route("/api/faq", get(routes::faq_get))
        .with_state(state)
}

/// Run the relay until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState { env: config.env };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("session relay listening on {} ({:?})", addr, config.env);
    if config.error_tracking_enabled {
        tracing::info!("error tracking enabled");
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Relay server error")?;

    Ok(())
}
