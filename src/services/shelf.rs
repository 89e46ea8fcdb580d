use std::sync::Arc;

use crate::error::{AppResult, OptionExt};
use crate::models::{Shelf, ShelfBase};
use crate::repository::ShelfRepository;

#[derive(Clone)]
pub struct ShelfService {
    repository: Arc<dyn ShelfRepository>,
}

impl ShelfService {
    pub fn new(repository: Arc<dyn ShelfRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Shelf>> {
        self.repository.list().await
    }

    pub async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Shelf>> {
        self.repository.list_by_user(user_id).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Shelf>> {
        self.repository.get(id).await
    }

    pub async fn create(&self, shelf: ShelfBase) -> AppResult<Shelf> {
        let id = self.repository.create(&shelf).await?;
        tracing::info!(shelf_id = %id, user_id = %shelf.user_id, "shelf created");
        self.get(&id).await?.ok_or_not_found("shelf")
    }

    /// Overwrites title, path, domain, description, theme and icon. The owner stays.
    pub async fn update(&self, id: &str, shelf: ShelfBase) -> AppResult<Shelf> {
        self.repository.update(&shelf.with_id(id)).await?;
        self.get(id).await?.ok_or_not_found("shelf")
    }

    pub async fn delete(&self, shelf: &Shelf) -> AppResult<()> {
        self.repository.delete(shelf).await?;
        tracing::info!(shelf_id = %shelf.id, "shelf deleted");
        Ok(())
    }
}
