use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;
use crate::domain::product::{Product, ProductId};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateProductDto {
    pub product_id: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProductDto {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultProductDto {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetByIdProductDto {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: String,
}

pub fn product_from_create(dto: CreateProductDto, generated_id: ProductId) -> Product {
    let id = dto.product_id.map(ProductId).unwrap_or(generated_id);
    Product {
        id,
        name: dto.name,
        price: dto.price,
        description: dto.description,
        image_url: dto.image_url,
        category_id: CategoryId(dto.category_id),
    }
}

pub fn product_from_update(dto: UpdateProductDto) -> Product {
    Product {
        id: ProductId(dto.product_id),
        name: dto.name,
        price: dto.price,
        description: dto.description,
        image_url: dto.image_url,
        category_id: CategoryId(dto.category_id),
    }
}

pub fn product_to_result(product: &Product) -> ResultProductDto {
    ResultProductDto {
        product_id: product.id.0.clone(),
        name: product.name.clone(),
        price: product.price,
        description: product.description.clone(),
        image_url: product.image_url.clone(),
        category_id: product.category_id.0.clone(),
    }
}

pub fn product_to_get_by_id(product: &Product) -> GetByIdProductDto {
    GetByIdProductDto {
        product_id: product.id.0.clone(),
        name: product.name.clone(),
        price: product.price,
        description: product.description.clone(),
        image_url: product.image_url.clone(),
        category_id: product.category_id.0.clone(),
    }
}

pub fn products_to_results(products: &[Product]) -> Vec<ResultProductDto> {
    products.iter().map(product_to_result).collect()
}
