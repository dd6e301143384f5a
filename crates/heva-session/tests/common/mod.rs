/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for heva-session tests

use heva_session::{ClientConfig, HevaClient, MemoryTokenStore, SessionManager};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at the mock server's `/api` prefix
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}/api", server.uri()),
        ..ClientConfig::default()
    }
}

/// Client over a shared in-memory store
#[allow(dead_code)]
pub fn client_for(server: &MockServer, store: &MemoryTokenStore) -> HevaClient {
    HevaClient::with_store(config_for(server), store.clone()).expect("client init")
}

/// Session manager over a shared in-memory store, already initialized
#[allow(dead_code)]
pub fn session_for(server: &MockServer, store: &MemoryTokenStore) -> SessionManager {
    let session = SessionManager::new(client_for(server, store));
    session.initialize().expect("initialize session");
    session
}

/// Login response body as the backend sends it
#[allow(dead_code)]
pub fn auth_body(access: &str, user_type: &str) -> serde_json::Value {
    serde_json::json!({
        "access": access,
        "refresh": "refresh-token",
        "user": {
            "email": "a@b.com",
            "username": "a@b.com",
            "full_name": "Achieng Otieno",
            "user_type": user_type,
            "gender": "female",
            "disability": false,
            "marginalized_groups": ["refugee"],
            "primary_identity": "creative"
        }
    })
}
