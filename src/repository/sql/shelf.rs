use async_trait::async_trait;
use sqlx::AnyPool;
use uuid::Uuid;

use crate::db::Dialect;
use crate::error::{AppError, AppResult};
use crate::models::{Shelf, ShelfBase};
use crate::repository::ShelfRepository;

const SELECT_SHELF: &str = "SELECT id, title, path, domain, description, theme, icon, user_id FROM shelf";

pub struct SqlShelfRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlShelfRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl ShelfRepository for SqlShelfRepository {
    async fn list(&self) -> AppResult<Vec<Shelf>> {
        let sql = self.dialect.prepare(SELECT_SHELF);
        sqlx::query_as::<_, Shelf>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing shelves", e))
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Shelf>> {
        let sql = self.dialect.prepare(&format!("{} WHERE user_id = ?", SELECT_SHELF));
        sqlx::query_as::<_, Shelf>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing shelves of user", e))
    }

    async fn get(&self, id: &str) -> AppResult<Option<Shelf>> {
        let sql = self.dialect.prepare(&format!("{} WHERE id = ?", SELECT_SHELF));
        sqlx::query_as::<_, Shelf>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading shelf", e))
    }

    async fn create(&self, shelf: &ShelfBase) -> AppResult<String> {
        let sql = self.dialect.prepare(
            r#"INSERT INTO shelf (id, title, path, domain, description, theme, icon, user_id)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        );
        // Shelves get time-ordered ids
        let id = Uuid::now_v7().to_string();
        sqlx::query(&sql)
            .bind(id.as_str())
            .bind(shelf.title.as_str())
            .bind(shelf.path.as_str())
            .bind(shelf.domain.as_str())
            .bind(shelf.description.as_str())
            .bind(shelf.theme.as_str())
            .bind(shelf.icon.as_str())
            .bind(shelf.user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("creating shelf", e))?;
        tracing::debug!(shelf_id = %id, user_id = %shelf.user_id, "shelf row inserted");
        Ok(id)
    }

    async fn update(&self, shelf: &Shelf) -> AppResult<()> {
        let sql = self.dialect.prepare(
            r#"UPDATE shelf
               SET title = ?,
                   path = ?,
                   domain = ?,
                   description = ?,
                   theme = ?,
                   icon = ?
               WHERE id = ?"#,
        );
        sqlx::query(&sql)
            .bind(shelf.title.as_str())
            .bind(shelf.path.as_str())
            .bind(shelf.domain.as_str())
            .bind(shelf.description.as_str())
            .bind(shelf.theme.as_str())
            .bind(shelf.icon.as_str())
            .bind(shelf.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating shelf", e))?;
        Ok(())
    }

    async fn delete(&self, shelf: &Shelf) -> AppResult<()> {
        let sql = self.dialect.prepare("DELETE FROM shelf WHERE id = ?");
        sqlx::query(&sql)
            .bind(shelf.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("deleting shelf", e))?;
        Ok(())
    }
}
