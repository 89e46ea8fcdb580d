//! Persistence layer: one capability trait per entity.
//!
//! Every trait has two implementations. [`sql`] talks to the configured
//! relational store through an `sqlx` [`AnyPool`]; [`memory`] keeps rows in
//! process and is what service and handler tests run against.
//!
//! Shared contract for all of them:
//! - `get*` returns `Ok(None)` when no row matches; errors are reserved for failures.
//! - `create` generates the id, stores every other field and returns the id.
//! - `update` overwrites the mutable columns by id and does not check that the row existed.
//! - `delete` is by id and ignores missing rows.
//! - Lists come back in storage order; no match is an empty `Vec`.

pub mod memory;
pub mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::AnyPool;

use crate::db::Dialect;
use crate::error::AppResult;
use crate::models::{Link, LinkBase, Section, SectionBase, Setting, Shelf, ShelfBase, User, UserBase};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;
    async fn get(&self, id: &str) -> AppResult<Option<User>>;
    /// The stored hash alone, for password checks.
    async fn get_password(&self, id: &str) -> AppResult<Option<String>>;
    /// `user.password` must already be hashed.
    async fn create(&self, user: &UserBase) -> AppResult<String>;
    /// Writes email and names only.
    async fn update(&self, user: &User) -> AppResult<()>;
    async fn patch_password(&self, id: &str, hash: &str) -> AppResult<()>;
    async fn delete(&self, user: &User) -> AppResult<()>;
}

#[async_trait]
pub trait ShelfRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Shelf>>;
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Shelf>>;
    async fn get(&self, id: &str) -> AppResult<Option<Shelf>>;
    async fn create(&self, shelf: &ShelfBase) -> AppResult<String>;
    /// Never touches `user_id`.
    async fn update(&self, shelf: &Shelf) -> AppResult<()>;
    async fn delete(&self, shelf: &Shelf) -> AppResult<()>;
}

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Section>>;
    async fn get(&self, id: &str) -> AppResult<Option<Section>>;
    async fn create(&self, section: &SectionBase) -> AppResult<String>;
    /// Writes the title only.
    async fn update(&self, section: &Section) -> AppResult<()>;
    async fn delete(&self, section: &Section) -> AppResult<()>;
}

#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn list_by_section(&self, section_id: &str) -> AppResult<Vec<Link>>;
    /// All links of all sections belonging to the shelf.
    async fn list_by_shelf(&self, shelf_id: &str) -> AppResult<Vec<Link>>;
    async fn get(&self, id: &str) -> AppResult<Option<Link>>;
    async fn create(&self, link: &LinkBase) -> AppResult<String>;
    /// Never touches `section_id`.
    async fn update(&self, link: &Link) -> AppResult<()>;
    async fn delete(&self, link: &Link) -> AppResult<()>;
}

/// Settings are seeded, not created; only their value changes.
#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Setting>>;
    async fn get_by_key(&self, key: &str, language_code: &str) -> AppResult<Option<Setting>>;
    async fn update(&self, key: &str, language_code: &str, value: &str) -> AppResult<()>;
}

/// The full set of repositories the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub shelves: Arc<dyn ShelfRepository>,
    pub sections: Arc<dyn SectionRepository>,
    pub links: Arc<dyn LinkRepository>,
    pub settings: Arc<dyn SettingRepository>,
}

impl Repositories {
    /// SQL-backed repositories sharing one pool and dialect.
    pub fn sql(pool: AnyPool, dialect: Dialect) -> Self {
        Self {
            users: Arc::new(sql::SqlUserRepository::new(pool.clone(), dialect)),
            shelves: Arc::new(sql::SqlShelfRepository::new(pool.clone(), dialect)),
            sections: Arc::new(sql::SqlSectionRepository::new(pool.clone(), dialect)),
            links: Arc::new(sql::SqlLinkRepository::new(pool.clone(), dialect)),
            settings: Arc::new(sql::SqlSettingRepository::new(pool, dialect)),
        }
    }

    /// In-process repositories over one shared [`memory::MemoryStore`].
    pub fn in_memory(store: memory::MemoryStore) -> Self {
        Self {
            users: Arc::new(memory::MemoryUserRepository::new(store.clone())),
            shelves: Arc::new(memory::MemoryShelfRepository::new(store.clone())),
            sections: Arc::new(memory::MemorySectionRepository::new(store.clone())),
            links: Arc::new(memory::MemoryLinkRepository::new(store.clone())),
            settings: Arc::new(memory::MemorySettingRepository::new(store)),
        }
    }
}
