//! HTTP route handlers and the router that wires them up.
//!
//! - `users`, `shelves`, `sections`, `links`, `settings`: the `/v1` API
//! - `health`: probes and build info, reachable without authentication

pub mod health;
pub mod links;
pub mod sections;
pub mod settings;
pub mod shelves;
pub mod users;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Builds the complete application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{userId}", get(users::get_user).put(users::update_user).delete(users::delete_user))
        .route("/users/{userId}/password", patch(users::patch_password))
        .route("/shelves", get(shelves::list_shelves).post(shelves::create_shelf))
        .route(
            "/shelves/{shelfId}",
            get(shelves::get_shelf).put(shelves::update_shelf).delete(shelves::delete_shelf),
        )
        .route("/sections", get(sections::list_sections).post(sections::create_section))
        .route(
            "/sections/{sectionId}",
            get(sections::get_section).put(sections::update_section).delete(sections::delete_section),
        )
        .route("/links", get(links::list_links).post(links::create_link))
        .route("/links/{linkId}", get(links::get_link).put(links::update_link).delete(links::delete_link))
        .route("/settings", get(settings::list_settings).put(settings::update_setting))
        .route("/settings/page", get(settings::get_page))
        .layer(from_fn_with_state(state.config.clone(), auth_middleware));

    Router::new()
        .route("/health/liveness", get(health::liveness))
        .route("/health/readiness", get(health::readiness))
        .route("/version", get(health::version))
        .nest("/v1", api)
        .with_state(state)
        // Icons arrive inline as base64, so allow bodies up to 10 MB
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
}
