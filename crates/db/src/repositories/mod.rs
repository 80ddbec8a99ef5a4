use async_trait::async_trait;
use thiserror::Error;

use catalog_core::domain::category::{Category, CategoryId};
use catalog_core::domain::product::{Product, ProductId};
use catalog_core::domain::product_image::{ProductImage, ProductImageId};

pub mod category;
pub mod memory;
pub mod product;
pub mod product_image;

pub use category::SqlCategoryRepository;
pub use memory::{InMemoryCategoryRepository, InMemoryProductImageRepository, InMemoryProductRepository};
pub use product::SqlProductRepository;
pub use product_image::SqlProductImageRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no record matches id `{0}`")]
    NotFound(String),
}

/// Minimal store contract shared by every catalog entity: unconditional
/// insert, idempotent delete, eager list, optional point read, and an
/// all-or-nothing replace keyed on the embedded identifier.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: Category) -> Result<(), RepositoryError>;

    /// Silent no-op when nothing matches.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), RepositoryError>;

    /// Eagerly materialized; row order is whatever the store returns.
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// Full-document replace. `NotFound` when no record matches.
    async fn replace_by_id(&self, category: Category) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: Product) -> Result<(), RepositoryError>;
    async fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn replace_by_id(&self, product: Product) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    async fn insert(&self, image: ProductImage) -> Result<(), RepositoryError>;
    async fn delete_by_id(&self, id: &ProductImageId) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<ProductImage>, RepositoryError>;
    async fn find_by_id(
        &self,
        id: &ProductImageId,
    ) -> Result<Option<ProductImage>, RepositoryError>;
    async fn replace_by_id(&self, image: ProductImage) -> Result<(), RepositoryError>;
}
