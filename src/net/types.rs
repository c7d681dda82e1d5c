//! Wire DTOs for the thumbnail board REST API.
//!
//! DESIGN
//! ======
//! Field defaults mirror what the backend fills in for older documents
//! (`"Untitled"`, `"general"`, not favorited) so a sparse record still decodes.
//! Identifiers are accepted as JSON strings or integers because the backend
//! has shipped with both document and relational stores.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A named collection of thumbnails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Number of thumbnails on the board at fetch time.
    #[serde(default)]
    pub thumbnail_count: u64,
}

/// A catalogued video thumbnail belonging to one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    pub thumbnail_url: String,
    /// Source video the thumbnail was derived from.
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub favorite: bool,
    /// Creation time as sent by the backend (RFC 3339 or RFC 1123 text).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `/login` response. A missing token means the login was refused.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error envelope the backend uses for rejected requests.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBoard {
    pub name: String,
}

/// Body for `POST /boards/{id}/thumbnails`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewThumbnail {
    pub video_url: String,
    pub title: String,
    pub category: String,
}

/// Response to create calls: the identifier of the new record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Created {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

/// Response to `PATCH /thumbnails/{id}/favorite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct FavoriteResponse {
    pub favorite: bool,
}

fn default_title() -> String {
    "Untitled".to_owned()
}

fn default_category() -> String {
    "general".to_owned()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id),
        serde_json::Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected non-empty string or integer id")),
    }
}
