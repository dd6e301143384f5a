/*
[INPUT]:  HEVA API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::UserProfile;

pub const DEMO_ACCESS_TOKEN: &str = "demo_access_token";
pub const DEMO_REFRESH_TOKEN: &str = "demo_refresh_token";

/// Response of both `POST /auth/login/` and `POST /auth/register/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    pub user: UserProfile,
}

impl AuthResponse {
    /// Synthetic session used when the backend cannot be reached and the
    /// offline demo fallback is enabled
    pub fn demo(email: &str) -> Self {
        Self {
            access: DEMO_ACCESS_TOKEN.to_string(),
            refresh: Some(DEMO_REFRESH_TOKEN.to_string()),
            user: UserProfile::demo(email),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.access == DEMO_ACCESS_TOKEN
    }
}
