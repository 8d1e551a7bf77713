//! To-do items REST service.
//!
//! # Overview
//! `app` wires the `/api/items` CRUD surface plus the welcome, health, and
//! storage-probe endpoints onto any [`store::ItemStore`]; `run` serves the
//! router on a listener. All item state lives behind the store trait, so the
//! in-memory and SQLite backends swap without touching this layer.
//!
//! # Design
//! - Handlers are stateless between requests; the store is the only shared
//!   mutable resource.
//! - Store failures are translated per operation: create/update report 400
//!   with `{error, innerError}`, everything else falls back to the 500
//!   `{error, details}` shape that the catch-panic layer also emits.
//! - Body decode failures map to 400 instead of axum's default 422.

pub mod config;
pub mod error;
pub mod item;
pub mod store;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::item::{CreateItem, Item, UpdateItem};
use crate::store::ItemStore;

pub type SharedStore = Arc<dyn ItemStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/db-test", get(db_test))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(store)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn welcome() -> &'static str {
    "Welcome to the ToDo API! Use /api/items to manage your tasks."
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "API is running",
        timestamp: Utc::now(),
    })
}

async fn db_test(
    State(store): State<SharedStore>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match store.ping().await {
        Ok(()) => Ok(Json(
            serde_json::json!({ "status": "Database connection successful" }),
        )),
        Err(err) => {
            tracing::error!(error = %err, "storage probe failed");
            Err(ApiError::BadRequest {
                error: err.to_string(),
                inner_error: err.inner_message(),
            })
        }
    }
}

async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store.list().await.map_err(|err| {
        tracing::error!(error = %err, "listing items failed");
        ApiError::internal(&err)
    })?;
    Ok(Json(items))
}

async fn create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    match store.create(input).await {
        Ok(item) => {
            let location = format!("/api/items/{}", item.id);
            Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response())
        }
        Err(err) => {
            tracing::error!(error = %err, "creating item failed");
            Err(ApiError::bad_request(&err))
        }
    }
}

async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let item = store.get(id).await.map_err(|err| {
        tracing::error!(error = %err, id, "fetching item failed");
        ApiError::internal(&err)
    })?;
    item.map(Json).ok_or(ApiError::NotFound)
}

async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateItem>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    match store.update(id, input).await {
        Ok(Some(_)) => Ok(StatusCode::NO_CONTENT),
        Ok(None) => Err(ApiError::NotFound),
        Err(err) => {
            tracing::error!(error = %err, id, "updating item failed");
            Err(ApiError::bad_request(&err))
        }
    }
}

async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match store.delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound),
        Err(err) => {
            tracing::error!(error = %err, id, "deleting item failed");
            Err(ApiError::internal(&err))
        }
    }
}
