use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use catalog_core::domain::product_image::ProductImageId;
use catalog_db::repositories::{ProductImageRepository, ProductRepository};
use catalog_core::dto::{
    product_image_from_create, product_image_from_update, product_image_to_get_by_id,
    product_image_to_result, product_images_to_results, CreateProductImageDto,
    GetByIdProductImageDto, ResultProductImageDto, UpdateProductImageDto,
};

use super::{ApiError, AppState};

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateProductImageDto>,
) -> Result<(StatusCode, Json<ResultProductImageDto>), ApiError> {
    let image = product_image_from_create(dto, ProductImageId(Uuid::new_v4().to_string()));
    state.product_images.insert(image.clone()).await?;

    info!(
        event_name = "catalog.product_image.created",
        product_image_id = %image.id.0,
        "product image created"
    );
    Ok((StatusCode::CREATED, Json(product_image_to_result(&image))))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResultProductImageDto>>, ApiError> {
    let images = state.product_images.find_all().await?;
    Ok(Json(product_images_to_results(&images)))
}

/// Point read with the related product eagerly attached. A dangling
/// `product_id` is not an error; the attachment is simply absent.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetByIdProductImageDto>, ApiError> {
    let image = state
        .product_images
        .find_by_id(&ProductImageId(id.clone()))
        .await?
        .ok_or_else(|| ApiError::not_found(&id))?;

    let product = state.products.find_by_id(&image.product_id).await?;

    Ok(Json(product_image_to_get_by_id(&image, product.as_ref())))
}

pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<UpdateProductImageDto>,
) -> Result<Json<ResultProductImageDto>, ApiError> {
    let image = product_image_from_update(dto);
    state.product_images.replace_by_id(image.clone()).await?;

    info!(
        event_name = "catalog.product_image.updated",
        product_image_id = %image.id.0,
        "product image replaced"
    );
    Ok(Json(product_image_to_result(&image)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.product_images.delete_by_id(&ProductImageId(id.clone())).await?;

    info!(
        event_name = "catalog.product_image.deleted",
        product_image_id = %id,
        "product image delete issued"
    );
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::Json;
    use rust_decimal::Decimal;

    use catalog_core::domain::category::CategoryId;
    use catalog_core::domain::product::{Product, ProductId};
    use catalog_core::dto::CreateProductImageDto;
    use catalog_db::repositories::ProductRepository;

    use super::{create, get_by_id};
    use crate::api::{in_memory_state, ApiError, AppState};

    fn gallery(product_id: &str) -> CreateProductImageDto {
        CreateProductImageDto {
            product_image_id: Some("img1".to_string()),
            image1: Some("https://cdn.example/front.png".to_string()),
            image2: None,
            image3: None,
            product_id: product_id.to_string(),
        }
    }

    async fn seed_product(state: &AppState, id: &str) {
        state
            .products
            .insert(Product {
                id: ProductId(id.to_string()),
                name: "Cordless Drill".to_string(),
                price: Decimal::new(12999, 2),
                description: None,
                image_url: None,
                category_id: CategoryId("c1".to_string()),
            })
            .await
            .expect("seed product");
    }

    #[tokio::test]
    async fn get_by_id_attaches_the_related_product() {
        let state = in_memory_state();
        seed_product(&state, "p1").await;
        create(State(state.clone()), Json(gallery("p1"))).await.expect("create image");

        let Json(found) = get_by_id(State(state), Path("img1".to_string()))
            .await
            .expect("read succeeds");

        let product = found.product.expect("product should be attached");
        assert_eq!(product.product_id, "p1");
        assert_eq!(product.name, "Cordless Drill");
    }

    #[tokio::test]
    async fn get_by_id_with_dangling_product_reference_still_succeeds() {
        let state = in_memory_state();
        create(State(state.clone()), Json(gallery("missing-product")))
            .await
            .expect("create image");

        let Json(found) = get_by_id(State(state), Path("img1".to_string()))
            .await
            .expect("read succeeds without the product");

        assert_eq!(found.product, None);
        assert_eq!(found.product_id, "missing-product");
    }

    #[tokio::test]
    async fn get_by_id_miss_is_not_found() {
        let state = in_memory_state();
        let result = get_by_id(State(state), Path("absent".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
