use std::sync::Arc;

use crate::error::{AppResult, OptionExt};
use crate::models::{Section, SectionBase};
use crate::repository::SectionRepository;

#[derive(Clone)]
pub struct SectionService {
    repository: Arc<dyn SectionRepository>,
}

impl SectionService {
    pub fn new(repository: Arc<dyn SectionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Section>> {
        self.repository.list_by_shelf(shelf_id).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Section>> {
        self.repository.get(id).await
    }

    pub async fn create(&self, section: SectionBase) -> AppResult<Section> {
        let id = self.repository.create(&section).await?;
        self.get(&id).await?.ok_or_not_found("section")
    }

    pub async fn update(&self, id: &str, section: SectionBase) -> AppResult<Section> {
        self.repository.update(&section.with_id(id)).await?;
        self.get(id).await?.ok_or_not_found("section")
    }

    pub async fn delete(&self, section: &Section) -> AppResult<()> {
        self.repository.delete(section).await
    }
}
