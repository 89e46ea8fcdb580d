//! # Linkshelf Backend Library
//!
//! Backend for a bookmark/link-sharing service. Users own shelves, shelves
//! are split into sections, sections hold links. A set of localized settings
//! drives the public about/contact/legal pages.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: the `Any` driver over Postgres, MySQL or SQLite
//! - **Tokio**: async runtime
//! - **bcrypt**: password hashing
//!
//! Requests flow `routes` → `services` → `repository` → database; responses
//! are re-read from the store and shaped by `mapper`.
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration and connection URL building
//! - [`db`]: pool setup, SQL dialects and schema bootstrap
//! - [`error`]: application error type and its HTTP mapping
//! - [`mapper`]: response shapes and the localized settings page
//! - [`middleware`]: the authentication stub
//! - [`models`]: entities and request bodies
//! - [`password`]: bcrypt hashing and verification
//! - [`repository`]: persistence traits with SQL and in-memory implementations
//! - [`routes`]: HTTP handlers and the router
//! - [`services`]: entity use cases
//! - [`state`]: shared application state

pub mod config;
pub mod db;
pub mod error;
pub mod mapper;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod tests;
