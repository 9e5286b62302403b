use serde::{Deserialize, Serialize};

use crate::domain::{Role, User};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the BeThere backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// The logged-in identity.
///
/// Authentication is out of scope, so the session user is provided by
/// configuration rather than a login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl SessionConfig {
    pub fn to_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
            followers: Vec::new(),
            following: Vec::new(),
            role: self.role,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_id() -> String {
    "u1".to_string()
}

fn default_username() -> String {
    "spyros".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            username: default_username(),
            name: String::new(),
            role: Role::default(),
        }
    }
}
