//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt`, no
//! listening socket. The router is built exactly as in `main.rs`, but backed
//! by an in-memory [`GameStore`] so tests run without a database.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{Map, Value};
use tower::ServiceExt;

use game_store_backend::db::{to_document, DbError, GameStore};
use game_store_backend::{router, AppState};

/// In-memory document store with the same merge semantics as the JSONB
/// implementation: shallow key replacement, ids assigned in insert order.
pub struct MemoryStore {
    games: Mutex<BTreeMap<i64, (Map<String, Value>, DateTime<Utc>)>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            games: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        })
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn list_games(&self) -> Result<Vec<Value>, DbError> {
        let games = self.games.lock().unwrap();
        Ok(games
            .iter()
            .map(|(id, (data, created_at))| {
                to_document(*id, Value::Object(data.clone()), *created_at)
            })
            .collect())
    }

    async fn get_game(&self, id: i64) -> Result<Option<Value>, DbError> {
        let games = self.games.lock().unwrap();
        Ok(games
            .get(&id)
            .map(|(data, created_at)| to_document(id, Value::Object(data.clone()), *created_at)))
    }

    async fn insert_game(&self, fields: Map<String, Value>) -> Result<i64, DbError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut games = self.games.lock().unwrap();
        games.insert(id, (fields, Utc::now()));
        Ok(id)
    }

    async fn update_game(&self, id: i64, fields: Map<String, Value>) -> Result<bool, DbError> {
        let mut games = self.games.lock().unwrap();
        match games.get_mut(&id) {
            Some((data, _)) => {
                data.extend(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_game(&self, id: i64) -> Result<bool, DbError> {
        let mut games = self.games.lock().unwrap();
        Ok(games.remove(&id).is_some())
    }
}

/// Build the application router over the given store, mirroring the router
/// construction in `main.rs` so tests exercise the same middleware stack.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let state = Arc::new(AppState { store });
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/frontend");
    router(state, static_dir)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}
