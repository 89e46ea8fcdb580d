//! In-process repositories, used as the test double for services and handlers.
//!
//! Rows live in insertion order inside one [`MemoryStore`] shared by all five
//! repositories, so parent/child queries (links of a shelf) work like the SQL
//! join. Ids are generated the same way as in the SQL repositories.
//!
//! Failures can be injected per operation with [`MemoryStore::fail`]; the
//! operation then returns an [`AppError::Database`] until [`MemoryStore::heal`].

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Link, LinkBase, Section, SectionBase, Setting, Shelf, ShelfBase, User, UserBase};
use crate::repository::{LinkRepository, SectionRepository, SettingRepository, ShelfRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    shelves: Vec<Shelf>,
    sections: Vec<Section>,
    links: Vec<Link>,
    settings: Vec<Setting>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    faults: Arc<Mutex<HashSet<&'static str>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `operation` (e.g. `"shelf.get"`) fail until healed.
    pub fn fail(&self, operation: &'static str) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.insert(operation);
        }
    }

    pub fn heal(&self, operation: &'static str) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.remove(operation);
        }
    }

    fn check(&self, operation: &'static str) -> AppResult<()> {
        let failing = self.faults.lock().map(|f| f.contains(operation)).unwrap_or(false);
        if failing {
            return Err(AppError::database(
                operation,
                sqlx::Error::Protocol(format!("injected failure in {}", operation)),
            ));
        }
        Ok(())
    }

    /// Stores a setting row as-is, replacing one with the same key and language.
    pub async fn put_setting(&self, setting: Setting) {
        let mut tables = self.tables.write().await;
        tables.settings.retain(|s| !(s.key == setting.key && s.language_code == setting.language_code));
        tables.settings.push(setting);
    }

    /// Stores a link row exactly as given, bypassing id generation.
    pub async fn put_link(&self, link: Link) {
        self.tables.write().await.links.push(link);
    }
}

pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        self.store.check("user.list")?;
        Ok(self.store.tables.read().await.users.clone())
    }

    async fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.store.check("user.get")?;
        Ok(self.store.tables.read().await.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_password(&self, id: &str) -> AppResult<Option<String>> {
        self.store.check("user.get_password")?;
        let tables = self.store.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).map(|u| u.password.clone()))
    }

    async fn create(&self, user: &UserBase) -> AppResult<String> {
        self.store.check("user.create")?;
        let id = Uuid::new_v4().to_string();
        self.store.tables.write().await.users.push(user.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        self.store.check("user.update")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.users.iter_mut().find(|u| u.id == user.id) {
            row.email = user.email.clone();
            row.first_name = user.first_name.clone();
            row.last_name = user.last_name.clone();
        }
        Ok(())
    }

    async fn patch_password(&self, id: &str, hash: &str) -> AppResult<()> {
        self.store.check("user.patch_password")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.users.iter_mut().find(|u| u.id == id) {
            row.password = hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        self.store.check("user.delete")?;
        self.store.tables.write().await.users.retain(|u| u.id != user.id);
        Ok(())
    }
}

pub struct MemoryShelfRepository {
    store: MemoryStore,
}

impl MemoryShelfRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShelfRepository for MemoryShelfRepository {
    async fn list(&self) -> AppResult<Vec<Shelf>> {
        self.store.check("shelf.list")?;
        Ok(self.store.tables.read().await.shelves.clone())
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Shelf>> {
        self.store.check("shelf.list_by_user")?;
        let tables = self.store.tables.read().await;
        Ok(tables.shelves.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Shelf>> {
        self.store.check("shelf.get")?;
        Ok(self.store.tables.read().await.shelves.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, shelf: &ShelfBase) -> AppResult<String> {
        self.store.check("shelf.create")?;
        let id = Uuid::now_v7().to_string();
        self.store.tables.write().await.shelves.push(shelf.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn update(&self, shelf: &Shelf) -> AppResult<()> {
        self.store.check("shelf.update")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.shelves.iter_mut().find(|s| s.id == shelf.id) {
            *row = Shelf { user_id: std::mem::take(&mut row.user_id), ..shelf.clone() };
        }
        Ok(())
    }

    async fn delete(&self, shelf: &Shelf) -> AppResult<()> {
        self.store.check("shelf.delete")?;
        self.store.tables.write().await.shelves.retain(|s| s.id != shelf.id);
        Ok(())
    }
}

pub struct MemorySectionRepository {
    store: MemoryStore,
}

impl MemorySectionRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionRepository for MemorySectionRepository {
    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Section>> {
        self.store.check("section.list_by_shelf")?;
        let tables = self.store.tables.read().await;
        Ok(tables.sections.iter().filter(|s| s.shelf_id == shelf_id).cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Section>> {
        self.store.check("section.get")?;
        Ok(self.store.tables.read().await.sections.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, section: &SectionBase) -> AppResult<String> {
        self.store.check("section.create")?;
        let id = Uuid::new_v4().to_string();
        self.store.tables.write().await.sections.push(section.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn update(&self, section: &Section) -> AppResult<()> {
        self.store.check("section.update")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.sections.iter_mut().find(|s| s.id == section.id) {
            row.title = section.title.clone();
        }
        Ok(())
    }

    async fn delete(&self, section: &Section) -> AppResult<()> {
        self.store.check("section.delete")?;
        self.store.tables.write().await.sections.retain(|s| s.id != section.id);
        Ok(())
    }
}

pub struct MemoryLinkRepository {
    store: MemoryStore,
}

impl MemoryLinkRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn list_by_section(&self, section_id: &str) -> AppResult<Vec<Link>> {
        self.store.check("link.list_by_section")?;
        let tables = self.store.tables.read().await;
        Ok(tables.links.iter().filter(|l| l.section_id == section_id).cloned().collect())
    }

    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Link>> {
        self.store.check("link.list_by_shelf")?;
        let tables = self.store.tables.read().await;
        let sections: HashSet<&str> =
            tables.sections.iter().filter(|s| s.shelf_id == shelf_id).map(|s| s.id.as_str()).collect();
        Ok(tables.links.iter().filter(|l| sections.contains(l.section_id.as_str())).cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Link>> {
        self.store.check("link.get")?;
        Ok(self.store.tables.read().await.links.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, link: &LinkBase) -> AppResult<String> {
        self.store.check("link.create")?;
        let id = Uuid::new_v4().to_string();
        self.store.tables.write().await.links.push(link.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn update(&self, link: &Link) -> AppResult<()> {
        self.store.check("link.update")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.links.iter_mut().find(|l| l.id == link.id) {
            *row = Link { section_id: std::mem::take(&mut row.section_id), ..link.clone() };
        }
        Ok(())
    }

    async fn delete(&self, link: &Link) -> AppResult<()> {
        self.store.check("link.delete")?;
        self.store.tables.write().await.links.retain(|l| l.id != link.id);
        Ok(())
    }
}

pub struct MemorySettingRepository {
    store: MemoryStore,
}

impl MemorySettingRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingRepository for MemorySettingRepository {
    async fn list(&self) -> AppResult<Vec<Setting>> {
        self.store.check("setting.list")?;
        Ok(self.store.tables.read().await.settings.clone())
    }

    async fn get_by_key(&self, key: &str, language_code: &str) -> AppResult<Option<Setting>> {
        self.store.check("setting.get_by_key")?;
        let tables = self.store.tables.read().await;
        Ok(tables.settings.iter().find(|s| s.key == key && s.language_code == language_code).cloned())
    }

    async fn update(&self, key: &str, language_code: &str, value: &str) -> AppResult<()> {
        self.store.check("setting.update")?;
        let mut tables = self.store.tables.write().await;
        if let Some(row) = tables.settings.iter_mut().find(|s| s.key == key && s.language_code == language_code) {
            row.value = value.to_string();
        }
        Ok(())
    }
}
