//! Repositories backed by the relational store.
//!
//! Statements are written with `?` placeholders and ANSI-quoted identifiers and
//! pass through [`Dialect::prepare`] right before execution.

mod link;
mod section;
mod setting;
mod shelf;
mod user;

pub use link::SqlLinkRepository;
pub use section::SqlSectionRepository;
pub use setting::SqlSettingRepository;
pub use shelf::SqlShelfRepository;
pub use user::SqlUserRepository;
