use serde::{Deserialize, Serialize};

use crate::domain::EventSummary;

/// Account role. Moderation controls (Ban/Restrict) render only for
/// admin sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Regular,
    Admin,
}

/// A user profile as returned by `GET /user/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub followers: Vec<String>,
    #[serde(default)]
    pub following: Vec<String>,
    /// Absent on the wire for most profiles; defaults to regular.
    #[serde(default)]
    pub role: Role,
}

/// Reduced user shape returned by `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub name: String,
}

/// `GET /search` payload: users and events matching the query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub users: Vec<UserSummary>,
    #[serde(default)]
    pub events: Vec<EventSummary>,
}
