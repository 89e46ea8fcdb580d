//! Tests for the Linkshelf backend.
//!
//! ## Test Modules
//!
//! - **api_tests**: HTTP handlers end to end on the in-memory repositories
//! - **config_tests**: configuration layering, validation and URL building
//! - **error_tests**: error display and HTTP status mapping
//! - **mapper_tests**: response shapes and the localized settings page
//! - **repository_tests**: SQL repositories against in-memory SQLite
//! - **service_tests**: service semantics, including injected store failures
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test service_tests
//! ```

pub mod config_tests;
pub mod service_tests;
