use std::sync::Arc;

use crate::error::{AppError, AppResult, OptionExt};
use crate::models::{PasswordChange, User, UserBase};
use crate::password::PasswordHasher;
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.list().await
    }

    /// The stored row, hash included.
    pub async fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.repository.get(id).await
    }

    /// Signup: hashes the plaintext password, stores the user and returns the stored row.
    pub async fn create(&self, mut user: UserBase) -> AppResult<User> {
        user.password = self.hasher.hash(&user.password)?;
        let id = self.repository.create(&user).await?;
        tracing::info!(user_id = %id, "user created");
        self.get(&id).await?.ok_or_not_found("user")
    }

    /// Profile update; the password in `user` is ignored.
    pub async fn update(&self, id: &str, user: UserBase) -> AppResult<User> {
        self.repository.update(&user.with_id(id)).await?;
        self.get(id).await?.ok_or_not_found("user")
    }

    /// Replaces the password after checking the old one.
    ///
    /// An unknown user fails exactly like a wrong password. Nothing is written
    /// unless verification succeeds.
    pub async fn patch_password(&self, id: &str, change: &PasswordChange) -> AppResult<()> {
        let stored = self.repository.get_password(id).await?.ok_or(AppError::CredentialMismatch)?;
        self.hasher.verify(&stored, &change.old_password)?;

        let hash = self.hasher.hash(&change.new_password)?;
        self.repository.patch_password(id, &hash).await?;
        tracing::info!(user_id = %id, "user password changed");
        Ok(())
    }

    pub async fn delete(&self, user: &User) -> AppResult<()> {
        self.repository.delete(user).await?;
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }
}
