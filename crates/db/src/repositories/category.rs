use sqlx::Row;

use catalog_core::domain::category::{Category, CategoryId};

use super::{CategoryRepository, RepositoryError};
use crate::DbPool;

pub struct SqlCategoryRepository {
    pool: DbPool,
}

impl SqlCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> Result<Category, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let name: String = row.try_get("name").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(Category { id: CategoryId(id), name })
}

#[async_trait::async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn insert(&self, category: Category) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO category (id, name) VALUES (?, ?)")
            .bind(&category.id.0)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM category WHERE id = ?").bind(&id.0).execute(&self.pool).await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows =
            sqlx::query("SELECT id, name FROM category").fetch_all(&self.pool).await?;

        rows.iter().map(row_to_category).collect()
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM category WHERE id = ?")
            .bind(&id.0)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_category(r)?)),
            None => Ok(None),
        }
    }

    async fn replace_by_id(&self, category: Category) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE category SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.id.0)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(category.id.0));
        }

        Ok(())
    }
}
