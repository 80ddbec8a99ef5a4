use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use catalog_core::domain::product::ProductId;
use catalog_db::repositories::ProductRepository;
use catalog_core::dto::{
    product_from_create, product_from_update, product_to_get_by_id, product_to_result,
    products_to_results, CreateProductDto, GetByIdProductDto, ResultProductDto, UpdateProductDto,
};

use super::{ApiError, AppState};

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateProductDto>,
) -> Result<(StatusCode, Json<ResultProductDto>), ApiError> {
    let product = product_from_create(dto, ProductId(Uuid::new_v4().to_string()));
    state.products.insert(product.clone()).await?;

    info!(event_name = "catalog.product.created", product_id = %product.id.0, "product created");
    Ok((StatusCode::CREATED, Json(product_to_result(&product))))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ResultProductDto>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(products_to_results(&products)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetByIdProductDto>, ApiError> {
    let product = state
        .products
        .find_by_id(&ProductId(id.clone()))
        .await?
        .ok_or_else(|| ApiError::not_found(&id))?;

    Ok(Json(product_to_get_by_id(&product)))
}

pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<UpdateProductDto>,
) -> Result<Json<ResultProductDto>, ApiError> {
    let product = product_from_update(dto);
    state.products.replace_by_id(product.clone()).await?;

    info!(event_name = "catalog.product.updated", product_id = %product.id.0, "product replaced");
    Ok(Json(product_to_result(&product)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.products.delete_by_id(&ProductId(id.clone())).await?;

    info!(event_name = "catalog.product.deleted", product_id = %id, "product delete issued");
    Ok(StatusCode::NO_CONTENT)
}
