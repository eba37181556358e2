//! Axum router setup.

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use fleetdesk_core::RecordStore;
use fleetdesk_core::config::ServerConfig;

use crate::computers;
use crate::error::{self, ApiError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route(
            "/api/computers",
            get(computers::list_computers).post(computers::create_computer),
        )
        .route(
            "/api/computers/stats/overview",
            get(computers::stats_overview),
        )
        .route(
            "/api/computers/{id}",
            get(computers::get_computer)
                .patch(computers::update_computer)
                .delete(computers::delete_computer),
        )
        .route("/health", get(health));

    let router = match &config.static_dir {
        Some(dir) => api.fallback_service(dashboard(dir)),
        None => api.fallback(not_found),
    };

    with_middleware(router.with_state(state), config)
}

/// Wrap a router in the middleware stack shared by every route.
///
/// Oversized bodies surface as a `JsonRejection` in the handler, so they
/// get the same `{"message"}` shape as every other API error.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Built dashboard assets; unknown paths get `index.html` with a 200 so
/// client-side routes survive a reload.
fn dashboard(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
