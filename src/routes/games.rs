//! Game catalog route handlers
//!
//! Pass-through CRUD over game documents. Bodies are arbitrary field maps;
//! by convention the frontend submits name, category, description, price,
//! image, platforms and stock, but nothing here validates that.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::db::GameStore;
use crate::AppState;

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"message": "Game not found"})))
}

/// A malformed identifier addresses no document, so it reads as not-found
/// rather than a server error.
fn parse_id(id: &str) -> Result<i64, (StatusCode, Json<Value>)> {
    id.parse::<i64>().map_err(|_| not_found())
}

/// Get all games
/// GET /api/games
pub async fn get_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, (StatusCode, Json<Value>)> {
    match state.store.list_games().await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            tracing::error!("Failed to fetch games: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Error fetching games", "error": e.to_string()})),
            ))
        }
    }
}

/// Get a single game by id
/// GET /api/games/{id}
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = parse_id(&id)?;

    match state.store.get_game(id).await {
        Ok(Some(game)) => Ok(Json(game)),
        Ok(None) => Err(not_found()),
        Err(e) => {
            tracing::error!(id = %id, "Failed to fetch game: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Error fetching game", "error": e.to_string()})),
            ))
        }
    }
}

/// Create a new game
/// POST /api/games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    match state.store.insert_game(fields).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(json!({"message": "Game created successfully", "id": id})),
        )),
        Err(e) => {
            tracing::error!("Failed to create game: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Error creating game", "error": e.to_string()})),
            ))
        }
    }
}

/// Merge-update an existing game
/// PUT /api/games/{id}
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = parse_id(&id)?;

    match state.store.update_game(id, fields).await {
        Ok(true) => Ok(Json(json!({"message": "Game updated successfully"}))),
        Ok(false) => Err(not_found()),
        Err(e) => {
            tracing::error!(id = %id, "Failed to update game: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Error updating game", "error": e.to_string()})),
            ))
        }
    }
}

/// Delete a game
/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = parse_id(&id)?;

    match state.store.delete_game(id).await {
        Ok(true) => Ok(Json(json!({"message": "Game deleted successfully"}))),
        Ok(false) => Err(not_found()),
        Err(e) => {
            tracing::error!(id = %id, "Failed to delete game: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Error deleting game", "error": e.to_string()})),
            ))
        }
    }
}
