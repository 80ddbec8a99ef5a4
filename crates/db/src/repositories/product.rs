use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::Row;

use catalog_core::domain::category::CategoryId;
use catalog_core::domain::product::{Product, ProductId};

use super::{ProductRepository, RepositoryError};
use crate::DbPool;

pub struct SqlProductRepository {
    pool: DbPool,
}

impl SqlProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// Prices persist as canonical decimal strings; sqlite REAL would lose digits.
fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let name: String = row.try_get("name").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let price_str: String =
        row.try_get("price").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let description: Option<String> =
        row.try_get("description").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let image_url: Option<String> =
        row.try_get("image_url").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let category_id: String =
        row.try_get("category_id").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    let price = Decimal::from_str(&price_str)
        .map_err(|e| RepositoryError::Decode(format!("invalid price `{price_str}`: {e}")))?;

    Ok(Product {
        id: ProductId(id),
        name,
        price,
        description,
        image_url,
        category_id: CategoryId(category_id),
    })
}

#[async_trait::async_trait]
impl ProductRepository for SqlProductRepository {
    async fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO product (id, name, price, description, image_url, category_id)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.id.0)
        .bind(&product.name)
        .bind(product.price.to_string())
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(&product.category_id.0)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM product WHERE id = ?").bind(&id.0).execute(&self.pool).await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, price, description, image_url, category_id FROM product",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, price, description, image_url, category_id
             FROM product WHERE id = ?",
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_product(r)?)),
            None => Ok(None),
        }
    }

    async fn replace_by_id(&self, product: Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE product
             SET name = ?, price = ?, description = ?, image_url = ?, category_id = ?
             WHERE id = ?",
        )
        .bind(&product.name)
        .bind(product.price.to_string())
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(&product.category_id.0)
        .bind(&product.id.0)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(product.id.0));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use catalog_core::domain::category::CategoryId;
    use catalog_core::domain::product::{Product, ProductId};

    use super::SqlProductRepository;
    use crate::repositories::{ProductRepository, RepositoryError};
    use crate::{connect_with_settings, migrations};

    async fn repo() -> SqlProductRepository {
        let pool = connect_with_settings("sqlite::memory:", 1, 5).await.expect("pool connects");
        migrations::run_pending(&pool).await.expect("migrations apply");
        SqlProductRepository::new(pool)
    }

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: "Cordless Drill".to_string(),
            price,
            description: Some("18V compact drill".to_string()),
            image_url: None,
            category_id: CategoryId("c1".to_string()),
        }
    }

    #[tokio::test]
    async fn price_survives_the_string_round_trip() {
        let repo = repo().await;
        let stored = product("p1", Decimal::new(12999, 2));
        repo.insert(stored.clone()).await.expect("insert");

        let found = repo.find_by_id(&ProductId("p1".to_string())).await.expect("find");
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn replace_swaps_every_field() {
        let repo = repo().await;
        repo.insert(product("p1", Decimal::new(12999, 2))).await.expect("insert");

        let replacement = Product {
            id: ProductId("p1".to_string()),
            name: "Impact Driver".to_string(),
            price: Decimal::new(15999, 2),
            description: None,
            image_url: Some("https://cdn.example/driver.png".to_string()),
            category_id: CategoryId("c2".to_string()),
        };
        repo.replace_by_id(replacement.clone()).await.expect("replace");

        let found = repo.find_by_id(&ProductId("p1".to_string())).await.expect("find");
        assert_eq!(found, Some(replacement));
    }

    #[tokio::test]
    async fn replace_of_missing_product_is_not_found() {
        let repo = repo().await;
        let result = repo.replace_by_id(product("ghost", Decimal::ONE)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == "ghost"));
    }

    #[tokio::test]
    async fn delete_then_list_drops_the_row() {
        let repo = repo().await;
        repo.insert(product("p1", Decimal::ONE)).await.expect("insert p1");
        repo.insert(product("p2", Decimal::TWO)).await.expect("insert p2");

        repo.delete_by_id(&ProductId("p1".to_string())).await.expect("delete");
        repo.delete_by_id(&ProductId("p1".to_string())).await.expect("repeat delete");

        let all = repo.find_all().await.expect("find_all");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, ProductId("p2".to_string()));
    }
}
