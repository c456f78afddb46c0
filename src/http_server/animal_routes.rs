//! Animal HTTP Routes
//!
//! - `GET  /animals`      filtered list
//! - `GET  /animals/:id`  single animal or 404
//! - `POST /animals`      validate and append

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::query::AnimalQuery;
use crate::schema::validate_animal;
use crate::storage::{Animal, AnimalStore};

// ==================
// Shared State
// ==================

/// Animal state shared across handlers
pub struct AnimalState {
    pub store: Arc<AnimalStore>,
}

impl AnimalState {
    pub fn new(store: Arc<AnimalStore>) -> Self {
        Self { store }
    }
}

// ==================
// Animal Routes
// ==================

/// Create animal routes
pub fn animal_routes(state: Arc<AnimalState>) -> Router {
    Router::new()
        .route("/animals", get(list_animals_handler).post(create_animal_handler))
        .route("/animals/:id", get(get_animal_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Query pairs are kept as a list so repeated `personalityTraits` survive.
async fn list_animals_handler(
    State(state): State<Arc<AnimalState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Animal>> {
    let query = AnimalQuery::parse(&pairs);
    Json(state.store.find(&query))
}

async fn get_animal_handler(
    State(state): State<Arc<AnimalState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Animal>> {
    state.store.get(&id).map(Json).ok_or(ApiError::NotFound)
}

async fn create_animal_handler(
    State(state): State<Arc<AnimalState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Animal>> {
    let Json(candidate) = body?;
    let animal = validate_animal(&candidate)?;

    // The rewrite and fsync block, so keep them off the async workers.
    let store = Arc::clone(&state.store);
    let created = tokio::task::spawn_blocking(move || store.append(animal)).await??;
    Ok(Json(created))
}
