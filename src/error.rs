use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// The primary error type for the application.
///
/// Services and repositories never recover from these locally; they travel to
/// the HTTP boundary unchanged in kind, optionally wrapped with the operation
/// that failed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A row the caller relies on does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Connectivity, constraint or query failure in the relational store.
    #[error("Database error while {context}: {source}")]
    Database {
        /// The repository operation that failed, e.g. "creating shelf".
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// The supplied password does not match the stored hash.
    ///
    /// Also raised when there is no stored hash at all, so callers cannot
    /// probe for existing accounts.
    #[error("Credential mismatch")]
    CredentialMismatch,
    /// Hashing a new password failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// For when a specific field in a request fails validation.
    #[error("Validation error on field '{field}': {message}")]
    ValidationError {
        /// The name of the field that failed validation.
        field: String,
        /// A message describing the validation error.
        message: String,
    },
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// For internal server errors that are not expected to be handled by the client.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a driver error with the operation it interrupted.
    pub fn database(context: &'static str, source: sqlx::Error) -> Self {
        AppError::Database { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, error_message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::Database { context, source } => {
                tracing::error!("Database error while {}: {}", context, source);
                (
                    StatusCode::BAD_REQUEST,
                    "DATABASE_ERROR",
                    format!("failed while {}", context),
                    Some(json!({ "details": source.to_string() })),
                )
            }
            AppError::CredentialMismatch => (
                StatusCode::BAD_REQUEST,
                "CREDENTIAL_MISMATCH",
                "the supplied password does not match".to_string(),
                None,
            ),
            AppError::PasswordHash(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                (StatusCode::BAD_REQUEST, "PASSWORD_HASH_ERROR", "failed to hash password".to_string(), None)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::ValidationError { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed for field '{}'", field),
                Some(json!({ "field": field, "message": message })),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None),
            AppError::Internal(e) => {
                let error_id = uuid::Uuid::new_v4();
                tracing::error!(%error_id, "Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    Some(json!({ "error_id": error_id.to_string() })),
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": error_code,
                "message": error_message,
            },
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if let Some(details) = details {
            body["error"]["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;

/// Converts an absent row into [`AppError::NotFound`].
pub trait OptionExt<T> {
    /// `entity` names what was looked up, e.g. `"shelf"`.
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}

/// Boundary checks for query parameters the handlers require.
pub mod validation {
    use super::*;

    /// Returns the trimmed value, or a `ValidationError` naming `field` when it is blank.
    pub fn require_param<'a>(value: Option<&'a str>, field: &str) -> AppResult<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(AppError::ValidationError {
                field: field.to_string(),
                message: format!("{} is required", field),
            }),
        }
    }
}
