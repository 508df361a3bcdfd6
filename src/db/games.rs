//! Game document storage
//!
//! Games are schemaless documents: the API stores whatever field map the
//! client submits, plus a store-assigned id and creation timestamp. On
//! Postgres that maps to a single JSONB column, with partial updates done
//! as a JSONB merge.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use serde_json::{Map, Value};

use crate::db::DbError;

/// CRUD operations over the game document collection.
///
/// Implemented by [`PgGameStore`] in production; tests substitute an
/// in-memory implementation so handlers can be exercised without a database.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// All documents, in store order.
    async fn list_games(&self) -> Result<Vec<Value>, DbError>;

    /// A single document by id, or `None` if absent.
    async fn get_game(&self, id: i64) -> Result<Option<Value>, DbError>;

    /// Store the submitted field map plus a creation timestamp; returns the
    /// new id.
    async fn insert_game(&self, fields: Map<String, Value>) -> Result<i64, DbError>;

    /// Merge the submitted fields into an existing document. Returns `false`
    /// if no document matched.
    async fn update_game(&self, id: i64, fields: Map<String, Value>) -> Result<bool, DbError>;

    /// Remove a document. Returns `false` if no document matched.
    async fn delete_game(&self, id: i64) -> Result<bool, DbError>;
}

/// Assemble the client-visible document from a stored row.
///
/// The store-managed `id` and `created_at` always win over same-named keys
/// the client may have smuggled into the field map.
pub fn to_document(id: i64, data: Value, created_at: DateTime<Utc>) -> Value {
    let mut doc = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    doc.insert("id".to_string(), Value::from(id));
    doc.insert("created_at".to_string(), Value::String(created_at.to_rfc3339()));
    Value::Object(doc)
}

/// Create the games table if it does not exist yet.
pub async fn ensure_schema(pool: &Pool) -> Result<(), DbError> {
    let client = pool.get().await?;
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS games (
                id BIGSERIAL PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )",
            &[],
        )
        .await?;
    Ok(())
}

/// Postgres-backed game store using a deadpool connection pool.
pub struct PgGameStore {
    pool: Pool,
}

impl PgGameStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn list_games(&self) -> Result<Vec<Value>, DbError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                "SELECT id, data, created_at FROM games ORDER BY id",
                &[],
            )
            .await?;

        let games = rows
            .into_iter()
            .map(|row| {
                to_document(
                    row.get("id"),
                    row.get("data"),
                    row.get::<_, DateTime<Utc>>("created_at"),
                )
            })
            .collect();

        Ok(games)
    }

    async fn get_game(&self, id: i64) -> Result<Option<Value>, DbError> {
        let client = self.pool.get().await?;

        let row = client
            .query_opt(
                "SELECT id, data, created_at FROM games WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.map(|row| {
            to_document(
                row.get("id"),
                row.get("data"),
                row.get::<_, DateTime<Utc>>("created_at"),
            )
        }))
    }

    async fn insert_game(&self, fields: Map<String, Value>) -> Result<i64, DbError> {
        let client = self.pool.get().await?;
        let now = Utc::now();
        let data = Value::Object(fields);

        let row = client
            .query_one(
                "INSERT INTO games (data, created_at) VALUES ($1, $2) RETURNING id",
                &[&data, &now],
            )
            .await?;

        Ok(row.get("id"))
    }

    async fn update_game(&self, id: i64, fields: Map<String, Value>) -> Result<bool, DbError> {
        let client = self.pool.get().await?;
        let patch = Value::Object(fields);

        // Merge-style partial update: untouched keys keep their values.
        let updated = client
            .execute(
                "UPDATE games SET data = data || $2 WHERE id = $1",
                &[&id, &patch],
            )
            .await?;

        Ok(updated > 0)
    }

    async fn delete_game(&self, id: i64) -> Result<bool, DbError> {
        let client = self.pool.get().await?;

        let deleted = client
            .execute("DELETE FROM games WHERE id = $1", &[&id])
            .await?;

        Ok(deleted > 0)
    }
}
