use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::{AppResult, OptionExt};
use crate::mapper::UserResponse;
use crate::models::{PasswordChange, UserBase};
use crate::state::AppState;

/// Signup.
pub async fn create_user(State(state): State<AppState>, Json(body): Json<UserBase>) -> AppResult<impl IntoResponse> {
    let user = state.services.users.create(body).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = state.services.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect::<Vec<_>>()))
}

pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let user = state.services.users.get(&id).await?.ok_or_not_found("user")?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UserBase>,
) -> AppResult<impl IntoResponse> {
    let user = state.services.users.update(&id, body).await?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn patch_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PasswordChange>,
) -> AppResult<impl IntoResponse> {
    state.services.users.patch_password(&id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let user = state.services.users.get(&id).await?.ok_or_not_found("user")?;
    state.services.users.delete(&user).await?;
    Ok(StatusCode::NO_CONTENT)
}
