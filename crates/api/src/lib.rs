//! Backline API - REST backend library.
//!
//! The binary in `main.rs` is a thin wrapper around [`app`]; integration
//! tests build the same router against a stand-in data service.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod datastore;
pub mod error;
pub mod routes;
pub mod state;
pub mod uploads;

pub use config::ApiConfig;
pub use state::AppState;

/// Build the complete application router.
///
/// - `/health` - liveness check
/// - `/api/*` - the REST surface
/// - `/uploads/*` - statically served uploaded images
///
/// CORS is wide open: the storefront and the admin panel are served from
/// other origins.
pub fn app(state: AppState) -> Router {
    let uploads_dir = state.config().upload_dir.clone();

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::api_routes())
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
