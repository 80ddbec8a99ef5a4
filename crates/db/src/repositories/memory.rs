//! In-memory repository fakes over the same store contract as the SQL
//! implementations. Used by handler tests and anywhere a pool is unwanted.

use std::collections::HashMap;

use tokio::sync::RwLock;

use catalog_core::domain::category::{Category, CategoryId};
use catalog_core::domain::product::{Product, ProductId};
use catalog_core::domain::product_image::{ProductImage, ProductImageId};

use super::{
    CategoryRepository, ProductImageRepository, ProductRepository, RepositoryError,
};

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<String, Category>>,
}

#[async_trait::async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: Category) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().await;
        categories.insert(category.id.0.clone(), category);
        Ok(())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().await;
        categories.remove(&id.0);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id.0).cloned())
    }

    async fn replace_by_id(&self, category: Category) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().await;
        match categories.get_mut(&category.id.0) {
            Some(existing) => {
                *existing = category;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(category.id.0)),
        }
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        products.insert(product.id.0.clone(), product);
        Ok(())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        products.remove(&id.0);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.get(&id.0).cloned())
    }

    async fn replace_by_id(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id.0) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(product.id.0)),
        }
    }
}

#[derive(Default)]
pub struct InMemoryProductImageRepository {
    images: RwLock<HashMap<String, ProductImage>>,
}

#[async_trait::async_trait]
impl ProductImageRepository for InMemoryProductImageRepository {
    async fn insert(&self, image: ProductImage) -> Result<(), RepositoryError> {
        let mut images = self.images.write().await;
        images.insert(image.id.0.clone(), image);
        Ok(())
    }

    async fn delete_by_id(&self, id: &ProductImageId) -> Result<(), RepositoryError> {
        let mut images = self.images.write().await;
        images.remove(&id.0);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ProductImage>, RepositoryError> {
        let images = self.images.read().await;
        Ok(images.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: &ProductImageId,
    ) -> Result<Option<ProductImage>, RepositoryError> {
        let images = self.images.read().await;
        Ok(images.get(&id.0).cloned())
    }

    async fn replace_by_id(&self, image: ProductImage) -> Result<(), RepositoryError> {
        let mut images = self.images.write().await;
        match images.get_mut(&image.id.0) {
            Some(existing) => {
                *existing = image;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(image.id.0)),
        }
    }
}
