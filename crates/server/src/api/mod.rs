//! Catalog HTTP API.
//!
//! Route groups, one per entity:
//! - `POST   /api/v1/categories`        — create (identifier generated when absent)
//! - `GET    /api/v1/categories`        — list all
//! - `PUT    /api/v1/categories`        — full replace, identifier embedded in the body
//! - `GET    /api/v1/categories/{id}`   — point read, 404 on miss
//! - `DELETE /api/v1/categories/{id}`   — idempotent, 204 even on miss
//!
//! `/api/v1/products` and `/api/v1/product-images` follow the same shape;
//! product-image point reads attach the related product when it exists.

pub mod categories;
pub mod product_images;
pub mod products;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;

use catalog_db::repositories::{
    CategoryRepository, ProductImageRepository, ProductRepository, RepositoryError,
};

/// Shared handler state. Repositories are injected already constructed, so
/// tests swap in the in-memory implementations without touching the routes.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub product_images: Arc<dyn ProductImageRepository>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

impl From<RepositoryError> for ApiError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound(id) => {
                Self::NotFound(format!("no record matches id `{id}`"))
            }
            other => Self::Storage(other),
        }
    }
}

impl ApiError {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound(format!("no record matches id `{id}`"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Storage(error) => (StatusCode::SERVICE_UNAVAILABLE, error.to_string()),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/categories",
            post(categories::create).get(categories::list).put(categories::update),
        )
        .route(
            "/api/v1/categories/{id}",
            get(categories::get_by_id).delete(categories::remove),
        )
        .route(
            "/api/v1/products",
            post(products::create).get(products::list).put(products::update),
        )
        .route("/api/v1/products/{id}", get(products::get_by_id).delete(products::remove))
        .route(
            "/api/v1/product-images",
            post(product_images::create)
                .get(product_images::list)
                .put(product_images::update),
        )
        .route(
            "/api/v1/product-images/{id}",
            get(product_images::get_by_id).delete(product_images::remove),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) fn in_memory_state() -> AppState {
    use catalog_db::repositories::{
        InMemoryCategoryRepository, InMemoryProductImageRepository, InMemoryProductRepository,
    };

    AppState {
        categories: Arc::new(InMemoryCategoryRepository::default()),
        products: Arc::new(InMemoryProductRepository::default()),
        product_images: Arc::new(InMemoryProductImageRepository::default()),
    }
}
