use std::sync::Arc;

use crate::error::AppResult;
use crate::models::Setting;
use crate::repository::SettingRepository;

#[derive(Clone)]
pub struct SettingService {
    repository: Arc<dyn SettingRepository>,
}

impl SettingService {
    pub fn new(repository: Arc<dyn SettingRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Setting>> {
        self.repository.list().await
    }

    pub async fn get(&self, key: &str, language_code: &str) -> AppResult<Option<Setting>> {
        self.repository.get_by_key(key, language_code).await
    }

    /// Stores `setting.value` for its key in its language only.
    pub async fn update(&self, setting: &Setting) -> AppResult<()> {
        self.repository.update(&setting.key, &setting.language_code, &setting.value).await?;
        tracing::info!(key = %setting.key, language = %setting.language_code, "setting updated");
        Ok(())
    }
}
