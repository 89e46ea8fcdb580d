use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{validation::require_param, AppResult};
use crate::mapper::{SettingPage, FALLBACK_LANGUAGE};
use crate::models::Setting;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub language_code: Option<String>,
}

/// The raw rows, every language.
pub async fn list_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.services.settings.list().await?))
}

/// The resolved page for `?language_code=`, English when omitted.
pub async fn get_page(State(state): State<AppState>, Query(q): Query<PageQuery>) -> AppResult<impl IntoResponse> {
    let language = q.language_code.as_deref().map(str::trim).filter(|l| !l.is_empty()).unwrap_or(FALLBACK_LANGUAGE);
    let settings = state.services.settings.list().await?;
    Ok(Json(SettingPage::resolve(language, &settings)))
}

/// Stores one value and answers with the page in that setting's language.
pub async fn update_setting(State(state): State<AppState>, Json(body): Json<Setting>) -> AppResult<impl IntoResponse> {
    require_param(Some(body.key.as_str()), "key")?;
    require_param(Some(body.language_code.as_str()), "language_code")?;

    state.services.settings.update(&body).await?;
    let settings = state.services.settings.list().await?;
    Ok(Json(SettingPage::resolve(&body.language_code, &settings)))
}
