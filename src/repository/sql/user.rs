use async_trait::async_trait;
use sqlx::AnyPool;
use uuid::Uuid;

use crate::db::Dialect;
use crate::error::{AppError, AppResult};
use crate::models::{User, UserBase};
use crate::repository::UserRepository;

pub struct SqlUserRepository {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlUserRepository {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        let sql = self.dialect.prepare(r#"SELECT id, email, first_name, last_name, password FROM "user""#);
        sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("listing users", e))
    }

    async fn get(&self, id: &str) -> AppResult<Option<User>> {
        let sql = self
            .dialect
            .prepare(r#"SELECT id, email, first_name, last_name, password FROM "user" WHERE id = ?"#);
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading user", e))
    }

    async fn get_password(&self, id: &str) -> AppResult<Option<String>> {
        let sql = self.dialect.prepare(r#"SELECT password FROM "user" WHERE id = ?"#);
        sqlx::query_scalar::<_, String>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("loading user password", e))
    }

    async fn create(&self, user: &UserBase) -> AppResult<String> {
        let sql = self.dialect.prepare(
            r#"INSERT INTO "user" (id, email, first_name, last_name, password)
               VALUES (?, ?, ?, ?, ?)"#,
        );
        let id = Uuid::new_v4().to_string();
        sqlx::query(&sql)
            .bind(id.as_str())
            .bind(user.email.as_str())
            .bind(user.first_name.as_str())
            .bind(user.last_name.as_str())
            .bind(user.password.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("creating user", e))?;
        tracing::debug!(user_id = %id, "user row inserted");
        Ok(id)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let sql = self.dialect.prepare(
            r#"UPDATE "user"
               SET email = ?,
                   first_name = ?,
                   last_name = ?
               WHERE id = ?"#,
        );
        sqlx::query(&sql)
            .bind(user.email.as_str())
            .bind(user.first_name.as_str())
            .bind(user.last_name.as_str())
            .bind(user.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating user", e))?;
        Ok(())
    }

    async fn patch_password(&self, id: &str, hash: &str) -> AppResult<()> {
        let sql = self.dialect.prepare(r#"UPDATE "user" SET password = ? WHERE id = ?"#);
        sqlx::query(&sql)
            .bind(hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("updating user password", e))?;
        Ok(())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let sql = self.dialect.prepare(r#"DELETE FROM "user" WHERE id = ?"#);
        sqlx::query(&sql)
            .bind(user.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("deleting user", e))?;
        Ok(())
    }
}
