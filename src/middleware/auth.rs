use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::AppConfig;
use crate::error::AppError;

/// Authentication stub guarding `/v1`.
///
/// With `auth.skip_authentication` every request passes; without it every
/// request is rejected with 401, as no real authentication is wired in yet.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if config.auth.skip_authentication {
        return Ok(next.run(req).await);
    }

    tracing::debug!(path = %req.uri().path(), "request denied, authentication is not available");
    Err(AppError::Unauthorized("authentication required".into()))
}
