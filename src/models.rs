//! Domain entities and the request bodies that create or change them.
//!
//! Entities mirror their table rows one to one and are decoded straight from
//! `sqlx` rows. Children only carry the id of their parent; nothing holds a
//! collection of children.

use serde::{Deserialize, Serialize};

/// A registered account. `password` always holds the bcrypt hash once stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Signup and profile update body.
///
/// On signup `password` is the plaintext to hash; profile updates ignore it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserBase {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
}

impl UserBase {
    pub fn with_id(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Shelf {
    pub id: String,
    pub title: String,
    pub path: String,
    pub domain: String,
    pub description: String,
    pub theme: String,
    pub icon: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfBase {
    pub title: String,
    pub path: String,
    pub domain: String,
    pub description: String,
    pub theme: String,
    pub icon: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl ShelfBase {
    pub fn with_id(self, id: impl Into<String>) -> Shelf {
        Shelf {
            id: id.into(),
            title: self.title,
            path: self.path,
            domain: self.domain,
            description: self.description,
            theme: self.theme,
            icon: self.icon,
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(rename = "shelfId")]
    pub shelf_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionBase {
    pub title: String,
    #[serde(rename = "shelfId")]
    pub shelf_id: String,
}

impl SectionBase {
    pub fn with_id(self, id: impl Into<String>) -> Section {
        Section { id: id.into(), title: self.title, shelf_id: self.shelf_id }
    }
}

/// A bookmark. `icon` is opaque (base64 payload or a reference).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub link: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "sectionId")]
    pub section_id: String,
}

impl Link {
    /// Strips whitespace that some stores pad fixed-width columns with.
    pub fn trimmed(mut self) -> Self {
        let color = self.color.trim();
        if color.len() != self.color.len() {
            self.color = color.to_string();
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkBase {
    pub title: String,
    pub link: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "sectionId")]
    pub section_id: String,
}

impl LinkBase {
    pub fn with_id(self, id: impl Into<String>) -> Link {
        Link {
            id: id.into(),
            title: self.title,
            link: self.link,
            icon: self.icon,
            color: self.color,
            section_id: self.section_id,
        }
    }
}

/// One localized configuration value, identified by `(key, language_code)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Setting {
    pub key: String,
    pub language_code: String,
    pub value: String,
}

impl Setting {
    pub fn new(key: impl Into<String>, language_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), language_code: language_code.into(), value: value.into() }
    }
}
