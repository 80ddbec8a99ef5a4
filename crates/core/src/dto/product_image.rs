use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};
use crate::domain::product_image::{ProductImage, ProductImageId};
use crate::dto::product::{product_to_result, ResultProductDto};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateProductImageDto {
    pub product_image_id: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub product_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProductImageDto {
    pub product_image_id: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub product_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultProductImageDto {
    pub product_image_id: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub product_id: String,
}

/// Read shape with the related product eagerly attached when it exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetByIdProductImageDto {
    pub product_image_id: String,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub product_id: String,
    pub product: Option<ResultProductDto>,
}

pub fn product_image_from_create(
    dto: CreateProductImageDto,
    generated_id: ProductImageId,
) -> ProductImage {
    let id = dto.product_image_id.map(ProductImageId).unwrap_or(generated_id);
    ProductImage {
        id,
        image1: dto.image1,
        image2: dto.image2,
        image3: dto.image3,
        product_id: ProductId(dto.product_id),
    }
}

pub fn product_image_from_update(dto: UpdateProductImageDto) -> ProductImage {
    ProductImage {
        id: ProductImageId(dto.product_image_id),
        image1: dto.image1,
        image2: dto.image2,
        image3: dto.image3,
        product_id: ProductId(dto.product_id),
    }
}

pub fn product_image_to_result(image: &ProductImage) -> ResultProductImageDto {
    ResultProductImageDto {
        product_image_id: image.id.0.clone(),
        image1: image.image1.clone(),
        image2: image.image2.clone(),
        image3: image.image3.clone(),
        product_id: image.product_id.0.clone(),
    }
}

pub fn product_image_to_get_by_id(
    image: &ProductImage,
    product: Option<&Product>,
) -> GetByIdProductImageDto {
    GetByIdProductImageDto {
        product_image_id: image.id.0.clone(),
        image1: image.image1.clone(),
        image2: image.image2.clone(),
        image3: image.image3.clone(),
        product_id: image.product_id.0.clone(),
        product: product.map(product_to_result),
    }
}

pub fn product_images_to_results(images: &[ProductImage]) -> Vec<ResultProductImageDto> {
    images.iter().map(product_image_to_result).collect()
}
