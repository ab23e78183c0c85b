//! Axum router for the catalog HTTP/JSON transport.
//! Routes: item CRUD under `/items` (with `/item` aliases), attribute filters,
//! `GET /health` (liveness), `GET /health/ready` (readiness).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use catalog_config::EmptyFilterPolicy;
use catalog_registry::{ItemQuery, ItemRepository};
use catalog_types::{Item, ItemId, ItemPatch, NewItem};

use crate::body::{coerce_flag, parse_object, CreateItemRequest, UpdateItemRequest};
use crate::error::ApiError;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The item store.
    pub repo: Arc<dyn ItemRepository>,
    /// Status returned by filter routes that match nothing.
    pub empty_filter: EmptyFilterPolicy,
}

/// Builds the axum `Router` with all catalog routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/item", post(create_item))
        .route("/items/available", get(list_available))
        .route("/items/name/:name", get(filter_by_name))
        .route("/items/category/:category", get(filter_by_category))
        .route("/items/availability/:flag", get(filter_by_availability))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route(
            "/item/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "catalog"}))
}

/// Readiness probe: `200 OK` once the store answers.
async fn handle_ready(State(state): State<AppState>) -> Result<Response, ApiError> {
    let items = state.repo.count().await?;
    Ok(Json(json!({"status": "ready", "service": "catalog", "items": items})).into_response())
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.repo.list_all().await?))
}

async fn list_available(State(state): State<AppState>) -> Result<Response, ApiError> {
    filtered(&state, ItemQuery::all().with_availability(true)).await
}

async fn filter_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    filtered(&state, ItemQuery::all().with_name(name)).await
}

async fn filter_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    filtered(&state, ItemQuery::all().with_category(category)).await
}

async fn filter_by_availability(
    State(state): State<AppState>,
    Path(flag): Path<String>,
) -> Result<Response, ApiError> {
    filtered(&state, ItemQuery::all().with_availability(coerce_flag(&flag))).await
}

/// Runs a filter query and applies the empty-result policy.
///
/// The policy only applies to queries carrying a predicate.
async fn filtered(state: &AppState, query: ItemQuery) -> Result<Response, ApiError> {
    let has_predicate = !query.is_unfiltered();
    let items = state.repo.find_all(query).await?;
    let status = match state.empty_filter {
        EmptyFilterPolicy::NotFound if has_predicate && items.is_empty() => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    Ok((status, Json(items)).into_response())
}

/// Non-numeric ids cannot name an item, so they are reported as not found.
fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&raw_id)?;
    match state.repo.find_by_id(id).await? {
        Some(item) => Ok(Json(item)),
        None => {
            tracing::debug!(%id, "item lookup missed");
            Err(ApiError::NotFound)
        }
    }
}

async fn create_item(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let request: CreateItemRequest = parse_object(&body)?;
    let item = state.repo.insert(NewItem::from(request)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: String,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&raw_id)?;
    let request: UpdateItemRequest = parse_object(&body)?;
    let item = state
        .repo
        .update(id, ItemPatch::from(request))
        .await
        .map_err(|e| {
            tracing::warn!(%id, error = %e, "item update rejected");
            ApiError::from(e)
        })?;
    Ok(Json(item))
}

/// Always answers `Item deleted`; removing an absent id is a no-op.
async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Ok(id) = raw_id.parse::<ItemId>() {
        state.repo.delete(id).await?;
    }
    Ok(Json(json!({"message": "Item deleted"})))
}
