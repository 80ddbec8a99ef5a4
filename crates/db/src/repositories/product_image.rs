use sqlx::Row;

use catalog_core::domain::product::ProductId;
use catalog_core::domain::product_image::{ProductImage, ProductImageId};

use super::{ProductImageRepository, RepositoryError};
use crate::DbPool;

pub struct SqlProductImageRepository {
    pool: DbPool,
}

impl SqlProductImageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_product_image(row: &sqlx::sqlite::SqliteRow) -> Result<ProductImage, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let image1: Option<String> =
        row.try_get("image1").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let image2: Option<String> =
        row.try_get("image2").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let image3: Option<String> =
        row.try_get("image3").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let product_id: String =
        row.try_get("product_id").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(ProductImage {
        id: ProductImageId(id),
        image1,
        image2,
        image3,
        product_id: ProductId(product_id),
    })
}

#[async_trait::async_trait]
impl ProductImageRepository for SqlProductImageRepository {
    async fn insert(&self, image: ProductImage) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO product_image (id, image1, image2, image3, product_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&image.id.0)
        .bind(&image.image1)
        .bind(&image.image2)
        .bind(&image.image3)
        .bind(&image.product_id.0)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &ProductImageId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM product_image WHERE id = ?")
            .bind(&id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ProductImage>, RepositoryError> {
        let rows =
            sqlx::query("SELECT id, image1, image2, image3, product_id FROM product_image")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(row_to_product_image).collect()
    }

    async fn find_by_id(
        &self,
        id: &ProductImageId,
    ) -> Result<Option<ProductImage>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, image1, image2, image3, product_id FROM product_image WHERE id = ?",
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_product_image(r)?)),
            None => Ok(None),
        }
    }

    async fn replace_by_id(&self, image: ProductImage) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE product_image
             SET image1 = ?, image2 = ?, image3 = ?, product_id = ?
             WHERE id = ?",
        )
        .bind(&image.image1)
        .bind(&image.image2)
        .bind(&image.image3)
        .bind(&image.product_id.0)
        .bind(&image.id.0)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(image.id.0));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::domain::product::ProductId;
    use catalog_core::domain::product_image::{ProductImage, ProductImageId};

    use super::SqlProductImageRepository;
    use crate::repositories::{ProductImageRepository, RepositoryError};
    use crate::{connect_with_settings, migrations};

    async fn repo() -> SqlProductImageRepository {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("pool connects");
        migrations::run_pending(&pool).await.expect("migrations apply");
        SqlProductImageRepository::new(pool)
    }

    fn image(id: &str) -> ProductImage {
        ProductImage {
            id: ProductImageId(id.to_string()),
            image1: Some("https://cdn.example/front.png".to_string()),
            image2: Some("https://cdn.example/back.png".to_string()),
            image3: None,
            product_id: ProductId("p1".to_string()),
        }
    }

    #[tokio::test]
    async fn optional_image_slots_round_trip() {
        let repo = repo().await;
        repo.insert(image("img1")).await.expect("insert");

        let found = repo.find_by_id(&ProductImageId("img1".to_string())).await.expect("find");
        assert_eq!(found, Some(image("img1")));
    }

    #[tokio::test]
    async fn replace_clears_fields_absent_from_the_replacement() {
        let repo = repo().await;
        repo.insert(image("img1")).await.expect("insert");

        let replacement = ProductImage {
            id: ProductImageId("img1".to_string()),
            image1: None,
            image2: None,
            image3: Some("https://cdn.example/side.png".to_string()),
            product_id: ProductId("p2".to_string()),
        };
        repo.replace_by_id(replacement.clone()).await.expect("replace");

        let found = repo.find_by_id(&ProductImageId("img1".to_string())).await.expect("find");
        assert_eq!(found, Some(replacement));
    }

    #[tokio::test]
    async fn replace_of_missing_image_is_not_found() {
        let repo = repo().await;
        let result = repo.replace_by_id(image("ghost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == "ghost"));
    }

    #[tokio::test]
    async fn delete_miss_is_silent() {
        let repo = repo().await;
        repo.delete_by_id(&ProductImageId("absent".to_string())).await.expect("no-op delete");

        let all = repo.find_all().await.expect("find_all");
        assert!(all.is_empty());
    }
}
