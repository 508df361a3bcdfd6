//! Game Store backend library.
//!
//! Exposes the store layer, route handlers and the router constructor so
//! integration tests and the binary entrypoint share one router.

pub mod db;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use db::GameStore;

pub struct AppState {
    pub store: Arc<dyn GameStore>,
}

/// Build the application router: the REST API plus the static frontend with
/// a catch-all fallback to the list page, so direct navigation to
/// client-rendered routes still works.
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // REST API
        .route("/api/games", get(routes::get_games))
        .route("/api/games", post(routes::create_game))
        .route("/api/games/{id}", get(routes::get_game))
        .route("/api/games/{id}", put(routes::update_game))
        .route("/api/games/{id}", delete(routes::delete_game))
        .with_state(state)
        // Static frontend, catch-all serves the list page
        .fallback_service(frontend)
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
