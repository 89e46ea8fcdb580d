use async_trait::async_trait;
use sqlx::AnyPool;

use crate::db::Dialect;
use crate::error::{AppError, AppResult};
use crate::models::Setting;
use crate::repository::SettingRepository;

pub struct SqlSettingRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlSettingRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl SettingRepository for SqlSettingRepository {
    async fn list(&self) -> AppResult<Vec<Setting>> {
        let sql = self.dialect.prepare(r#"SELECT "key", language_code, value FROM setting"#);
        sqlx::query_as::<_, Setting>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing settings", e))
    }

    async fn get_by_key(&self, key: &str, language_code: &str) -> AppResult<Option<Setting>> {
        let sql = self.dialect.prepare(
            r#"SELECT "key", language_code, value FROM setting WHERE "key" = ? AND language_code = ?"#,
        );
        sqlx::query_as::<_, Setting>(&sql)
            .bind(key)
            .bind(language_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading setting", e))
    }

    async fn update(&self, key: &str, language_code: &str, value: &str) -> AppResult<()> {
        let sql = self
            .dialect
            .prepare(r#"UPDATE setting SET value = ? WHERE "key" = ? AND language_code = ?"#);
        sqlx::query(&sql)
            .bind(value)
            .bind(key)
            .bind(language_code)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating setting", e))?;
        Ok(())
    }
}
