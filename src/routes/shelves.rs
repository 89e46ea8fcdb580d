use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{AppResult, OptionExt};
use crate::models::ShelfBase;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ShelfQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

pub async fn create_shelf(State(state): State<AppState>, Json(body): Json<ShelfBase>) -> AppResult<impl IntoResponse> {
    let shelf = state.services.shelves.create(body).await?;
    Ok((StatusCode::CREATED, Json(shelf)))
}

/// All shelves, or only those of `?userId=`.
pub async fn list_shelves(State(state): State<AppState>, Query(q): Query<ShelfQuery>) -> AppResult<impl IntoResponse> {
    let shelves = match q.user_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(user_id) => state.services.shelves.list_by_user(user_id).await?,
        None => state.services.shelves.list().await?,
    };
    Ok(Json(shelves))
}

pub async fn get_shelf(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let shelf = state.services.shelves.get(&id).await?.ok_or_not_found("shelf")?;
    Ok(Json(shelf))
}

pub async fn update_shelf(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ShelfBase>,
) -> AppResult<impl IntoResponse> {
    let shelf = state.services.shelves.update(&id, body).await?;
    Ok(Json(shelf))
}

pub async fn delete_shelf(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let shelf = state.services.shelves.get(&id).await?.ok_or_not_found("shelf")?;
    state.services.shelves.delete(&shelf).await?;
    Ok(StatusCode::NO_CONTENT)
}
