#![allow(dead_code)]

pub mod mock_backend;

use bethere::api::ApiClient;
use bethere::app::App;
use bethere::config::ApiConfig;
use bethere::domain::{Role, User};
use bethere::session::SessionContext;

use mock_backend::MockBackend;

pub fn test_api_config(mock: &MockBackend) -> ApiConfig {
    ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn test_client(mock: &MockBackend) -> ApiClient {
    ApiClient::new(&test_api_config(mock)).expect("failed to build test client")
}

/// App logged in as "spyros" (id u1), the default user of the original
/// test fixtures.
pub fn test_app(mock: &MockBackend, role: Role) -> App {
    let session = SessionContext::new(User {
        id: "u1".to_string(),
        username: "spyros".to_string(),
        name: "Spyros".to_string(),
        followers: Vec::new(),
        following: Vec::new(),
        role,
    });
    App::new(test_client(mock), session)
}
