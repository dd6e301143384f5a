/*
[INPUT]:  Credentials and validated registration payloads
[OUTPUT]: Auth responses with the bearer token stored on the client
[POS]:    HTTP layer - authentication endpoints (no token required)
[UPDATE]: When auth endpoints or the offline fallback policy change
*/

use reqwest::Method;
use tracing::{debug, info, warn};

use crate::http::{HevaClient, HevaError, Result};
use crate::types::{AuthResponse, LoginRequest, RegistrationPayload};

const LOGIN_ENDPOINT: &str = "/auth/login/";
const REGISTER_ENDPOINT: &str = "/auth/register/";
const LOGIN_FAILURE: &str = "Login failed";

impl HevaClient {
    /// Log in with email and password
    ///
    /// POST /auth/login/
    ///
    /// With `allow_offline_demo_session` set, any failure to obtain a session
    /// from the backend yields the demo session instead of an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = match self.request_login(email, password).await {
            Ok(response) => response,
            Err(err) if self.allows_offline_demo_session() => {
                warn!(error = %err, "login failed, using offline demo session");
                AuthResponse::demo(email)
            }
            Err(err) => return Err(err),
        };

        self.set_token(&response.access)?;
        info!(user_type = response.user.user_type.as_str(), demo = response.is_demo(), "logged in");
        Ok(response)
    }

    async fn request_login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest { email, password };
        let builder = self
            .public_request(Method::POST, LOGIN_ENDPOINT)?
            .json(&body);

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "login rejected");
            return Err(HevaError::Authentication {
                message: LOGIN_FAILURE.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Register a new account
    ///
    /// POST /auth/register/
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<AuthResponse> {
        let builder = self
            .public_request(Method::POST, REGISTER_ENDPOINT)?
            .json(payload);
        let response: AuthResponse = self
            .send_public_json(builder, "Registration failed")
            .await?;

        self.set_token(&response.access)?;
        info!(user_type = payload.user_type().as_str(), "registered");
        Ok(response)
    }

    /// Forget the token locally. The backend is not contacted.
    pub fn logout(&self) -> Result<()> {
        self.tokens().clear()?;
        Ok(())
    }
}
