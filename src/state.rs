use std::sync::Arc;

use sqlx::AnyPool;

use crate::config::AppConfig;
use crate::services::Services;

/// The shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// The pool behind the SQL repositories; `None` when running on the in-memory store.
    pub pool: Option<AnyPool>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: Services, pool: Option<AnyPool>, config: AppConfig) -> Self {
        Self { services, pool, config: Arc::new(config) }
    }
}
