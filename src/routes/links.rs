use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{validation::require_param, AppResult, OptionExt};
use crate::models::LinkBase;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LinkQuery {
    #[serde(rename = "shelfId")]
    pub shelf_id: Option<String>,
    #[serde(rename = "sectionId")]
    pub section_id: Option<String>,
}

pub async fn create_link(State(state): State<AppState>, Json(body): Json<LinkBase>) -> AppResult<impl IntoResponse> {
    let link = state.services.links.create(body).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Links of a whole shelf (`?shelfId=`) or of one section (`?sectionId=`).
/// `shelfId` wins when both are given.
pub async fn list_links(State(state): State<AppState>, Query(q): Query<LinkQuery>) -> AppResult<impl IntoResponse> {
    let links = if let Ok(shelf_id) = require_param(q.shelf_id.as_deref(), "shelfId") {
        state.services.links.list_by_shelf(shelf_id).await?
    } else {
        let section_id = require_param(q.section_id.as_deref(), "sectionId")?;
        state.services.links.list_by_section(section_id).await?
    };
    Ok(Json(links))
}

pub async fn get_link(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let link = state.services.links.get(&id).await?.ok_or_not_found("link")?;
    Ok(Json(link))
}

pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<LinkBase>,
) -> AppResult<impl IntoResponse> {
    let link = state.services.links.update(&id, body).await?;
    Ok(Json(link))
}

pub async fn delete_link(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let link = state.services.links.get(&id).await?.ok_or_not_found("link")?;
    state.services.links.delete(&link).await?;
    Ok(StatusCode::NO_CONTENT)
}
