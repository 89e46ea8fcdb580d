//! Use cases on top of the repositories.
//!
//! Writes follow the create-then-reload / update-then-reload pattern: the
//! write goes through the repository, then the row is read back by id and that
//! canonical row is returned. The two steps are separate statements. When the
//! reload fails the row stays written and the caller still gets the error.

mod link;
mod section;
mod setting;
mod shelf;
mod user;

pub use link::LinkService;
pub use section::SectionService;
pub use setting::SettingService;
pub use shelf::ShelfService;
pub use user::UserService;

use crate::password::PasswordHasher;
use crate::repository::Repositories;

/// All entity services, cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub shelves: ShelfService,
    pub sections: SectionService,
    pub links: LinkService,
    pub settings: SettingService,
}

impl Services {
    pub fn new(repositories: Repositories, hasher: PasswordHasher) -> Self {
        Self {
            users: UserService::new(repositories.users, hasher),
            shelves: ShelfService::new(repositories.shelves),
            sections: SectionService::new(repositories.sections),
            links: LinkService::new(repositories.links),
            settings: SettingService::new(repositories.settings),
        }
    }
}
