use async_trait::async_trait;
use sqlx::AnyPool;
use uuid::Uuid;

use crate::db::Dialect;
use crate::error::{AppError, AppResult};
use crate::models::{Section, SectionBase};
use crate::repository::SectionRepository;

pub struct SqlSectionRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlSectionRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl SectionRepository for SqlSectionRepository {
    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Section>> {
        let sql = self.dialect.prepare("SELECT id, title, shelf_id FROM section WHERE shelf_id = ?");
        sqlx::query_as::<_, Section>(&sql)
            .bind(shelf_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing sections", e))
    }

    async fn get(&self, id: &str) -> AppResult<Option<Section>> {
        let sql = self.dialect.prepare("SELECT id, title, shelf_id FROM section WHERE id = ?");
        sqlx::query_as::<_, Section>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading section", e))
    }

    async fn create(&self, section: &SectionBase) -> AppResult<String> {
        let sql = self.dialect.prepare("INSERT INTO section (id, title, shelf_id) VALUES (?, ?, ?)");
        let id = Uuid::new_v4().to_string();
        sqlx::query(&sql)
            .bind(id.as_str())
            .bind(section.title.as_str())
            .bind(section.shelf_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("creating section", e))?;
        Ok(id)
    }

    async fn update(&self, section: &Section) -> AppResult<()> {
        let sql = self.dialect.prepare("UPDATE section SET title = ? WHERE id = ?");
        sqlx::query(&sql)
            .bind(section.title.as_str())
            .bind(section.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating section", e))?;
        Ok(())
    }

    async fn delete(&self, section: &Section) -> AppResult<()> {
        let sql = self.dialect.prepare("DELETE FROM section WHERE id = ?");
        sqlx::query(&sql)
            .bind(section.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("deleting section", e))?;
        Ok(())
    }
}
