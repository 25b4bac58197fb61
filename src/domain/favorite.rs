//! Favorites and the authenticated user they belong to.

use serde::{Deserialize, Serialize};

/// A favorited country as stored in the remote per-user collection.
///
/// `favorite_id` is assigned by the remote store when the document is created
/// and is the only handle usable for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub country_code: String,
    pub favorite_id: String,
}

impl Favorite {
    #[must_use]
    pub fn new(country_code: impl Into<String>, favorite_id: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            favorite_id: favorite_id.into(),
        }
    }
}

/// Payload sent to the remote store when a favorite is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub country_code: String,
    /// Unix timestamp (seconds) of creation.
    pub created_at: i64,
}

impl NewFavorite {
    /// Creates a payload stamped with the current time.
    #[must_use]
    pub fn now(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// An authenticated user as reported by the external auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }
}
