//! Game Store Backend Server
//!
//! Provides:
//! - REST API for game catalog CRUD
//! - Static file serving for the browser frontend
//! - PostgreSQL storage for game documents

use deadpool_postgres::{Config, Runtime};
use std::sync::Arc;
use tokio_postgres::NoTls;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_store_backend::{db, router, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "game_store_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection pool
    let mut cfg = Config::new();
    cfg.host = std::env::var("DB_HOST").ok();
    cfg.port = std::env::var("DB_PORT").ok().and_then(|p| p.parse().ok());
    cfg.dbname = Some(std::env::var("DB_NAME").unwrap_or_else(|_| "game_store".to_string()));
    cfg.user = std::env::var("DB_USER").ok();
    cfg.password = std::env::var("DB_PASSWORD").ok();

    let db_pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .expect("Failed to create database pool");

    // Test connection
    let _ = db_pool.get().await.expect("Failed to connect to database");
    tracing::info!("Connected to database");

    db::ensure_schema(&db_pool)
        .await
        .expect("Failed to create games table");

    let static_dir = std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| "frontend".to_string());

    let state = Arc::new(AppState {
        store: Arc::new(db::PgGameStore::new(db_pool)),
    });

    let app = router(state, &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| "0.0.0.0:1250".to_string());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
