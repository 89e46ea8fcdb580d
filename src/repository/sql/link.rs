use async_trait::async_trait;
use sqlx::AnyPool;
use uuid::Uuid;

use crate::db::Dialect;
use crate::error::{AppError, AppResult};
use crate::models::{Link, LinkBase};
use crate::repository::LinkRepository;

pub struct SqlLinkRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlLinkRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl LinkRepository for SqlLinkRepository {
    async fn list_by_section(&self, section_id: &str) -> AppResult<Vec<Link>> {
        let sql = self
            .dialect
            .prepare("SELECT id, title, link, icon, color, section_id FROM link WHERE section_id = ?");
        sqlx::query_as::<_, Link>(&sql)
            .bind(section_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing links of section", e))
    }

    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Link>> {
        let sql = self.dialect.prepare(
            r#"SELECT l.id, l.title, l.link, l.icon, l.color, l.section_id
               FROM link l
               JOIN section s ON l.section_id = s.id
               WHERE s.shelf_id = ?"#,
        );
        sqlx::query_as::<_, Link>(&sql)
            .bind(shelf_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing links of shelf", e))
    }

    async fn get(&self, id: &str) -> AppResult<Option<Link>> {
        let sql = self
            .dialect
            .prepare("SELECT id, title, link, icon, color, section_id FROM link WHERE id = ?");
        sqlx::query_as::<_, Link>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading link", e))
    }

    async fn create(&self, link: &LinkBase) -> AppResult<String> {
        let sql = self.dialect.prepare(
            r#"INSERT INTO link (id, title, link, icon, color, section_id)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        );
        let id = Uuid::new_v4().to_string();
        sqlx::query(&sql)
            .bind(id.as_str())
            .bind(link.title.as_str())
            .bind(link.link.as_str())
            .bind(link.icon.as_str())
            .bind(link.color.as_str())
            .bind(link.section_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("creating link", e))?;
        Ok(id)
    }

    async fn update(&self, link: &Link) -> AppResult<()> {
        let sql = self.dialect.prepare(
            r#"UPDATE link
               SET title = ?,
                   link = ?,
                   icon = ?,
                   color = ?
               WHERE id = ?"#,
        );
        sqlx::query(&sql)
            .bind(link.title.as_str())
            .bind(link.link.as_str())
            .bind(link.icon.as_str())
            .bind(link.color.as_str())
            .bind(link.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating link", e))?;
        Ok(())
    }

    async fn delete(&self, link: &Link) -> AppResult<()> {
        let sql = self.dialect.prepare("DELETE FROM link WHERE id = ?");
        sqlx::query(&sql)
            .bind(link.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("deleting link", e))?;
        Ok(())
    }
}
