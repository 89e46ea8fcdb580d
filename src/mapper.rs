//! Entity to wire-shape mapping.
//!
//! Shelves, sections and links go out as they are. Users lose their password
//! hash, and settings are folded into one [`SettingPage`] per language.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Setting, User};

/// Language used when a setting is missing for the requested one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A user as returned by the API; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { id: user.id, email: user.email, first_name: user.first_name, last_name: user.last_name }
    }
}

/// The public page content (about, contact, legal texts) for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingPage {
    pub about: String,
    pub about_show: bool,
    pub contact: String,
    pub contact_show: bool,
    pub imprint: String,
    pub imprint_show: bool,
    pub terms_of_use: String,
    pub terms_of_use_show: bool,
    pub privacy_policy: String,
    pub privacy_policy_show: bool,
    pub redirect_to_dashboard: bool,
}

impl SettingPage {
    /// Resolves every field for `language_code`, falling back to English and
    /// then to empty text / `false`. Flags are set only by the exact value `"true"`.
    pub fn resolve(language_code: &str, settings: &[Setting]) -> Self {
        let index: HashMap<String, &str> = settings
            .iter()
            .map(|s| (format!("{}_{}", s.key, s.language_code), s.value.as_str()))
            .collect();

        let text = |field: &str| -> String {
            index
                .get(&format!("{}_{}", field, language_code))
                .or_else(|| index.get(&format!("{}_{}", field, FALLBACK_LANGUAGE)))
                .map(|v| v.to_string())
                .unwrap_or_default()
        };
        let flag = |field: &str| text(field) == "true";

        Self {
            about: text("about"),
            about_show: flag("about_show"),
            contact: text("contact"),
            contact_show: flag("contact_show"),
            imprint: text("imprint"),
            imprint_show: flag("imprint_show"),
            terms_of_use: text("terms_of_use"),
            terms_of_use_show: flag("terms_of_use_show"),
            privacy_policy: text("privacy_policy"),
            privacy_policy_show: flag("privacy_policy_show"),
            redirect_to_dashboard: flag("redirect_to_dashboard"),
        }
    }
}
