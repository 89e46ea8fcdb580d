use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{validation::require_param, AppResult, OptionExt};
use crate::models::SectionBase;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SectionQuery {
    #[serde(rename = "shelfId")]
    pub shelf_id: Option<String>,
}

pub async fn create_section(
    State(state): State<AppState>,
    Json(body): Json<SectionBase>,
) -> AppResult<impl IntoResponse> {
    let section = state.services.sections.create(body).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// Sections are only ever listed per shelf.
pub async fn list_sections(
    State(state): State<AppState>,
    Query(q): Query<SectionQuery>,
) -> AppResult<impl IntoResponse> {
    let shelf_id = require_param(q.shelf_id.as_deref(), "shelfId")?;
    Ok(Json(state.services.sections.list_by_shelf(shelf_id).await?))
}

pub async fn get_section(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let section = state.services.sections.get(&id).await?.ok_or_not_found("section")?;
    Ok(Json(section))
}

pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SectionBase>,
) -> AppResult<impl IntoResponse> {
    let section = state.services.sections.update(&id, body).await?;
    Ok(Json(section))
}

pub async fn delete_section(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let section = state.services.sections.get(&id).await?.ok_or_not_found("section")?;
    state.services.sections.delete(&section).await?;
    Ok(StatusCode::NO_CONTENT)
}
