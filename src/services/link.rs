use std::sync::Arc;

use crate::error::{AppResult, OptionExt};
use crate::models::{Link, LinkBase};
use crate::repository::LinkRepository;

/// Link use cases. Every link handed out has its `color` trimmed.
#[derive(Clone)]
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Link>> {
        let links = self.repository.list_by_shelf(shelf_id).await?;
        Ok(links.into_iter().map(Link::trimmed).collect())
    }

    pub async fn list_by_section(&self, section_id: &str) -> AppResult<Vec<Link>> {
        let links = self.repository.list_by_section(section_id).await?;
        Ok(links.into_iter().map(Link::trimmed).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Link>> {
        Ok(self.repository.get(id).await?.map(Link::trimmed))
    }

    pub async fn create(&self, link: LinkBase) -> AppResult<Link> {
        let id = self.repository.create(&link).await?;
        self.get(&id).await?.ok_or_not_found("link")
    }

    /// Overwrites title, url, icon and color; the link stays in its section.
    pub async fn update(&self, id: &str, link: LinkBase) -> AppResult<Link> {
        self.repository.update(&link.with_id(id)).await?;
        self.get(id).await?.ok_or_not_found("link")
    }

    pub async fn delete(&self, link: &Link) -> AppResult<()> {
        self.repository.delete(link).await
    }
}
