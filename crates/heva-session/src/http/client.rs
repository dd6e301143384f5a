/*
[INPUT]:  Client configuration and a token store
[OUTPUT]: Configured reqwest client that signs requests with the bearer token
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{FileTokenStore, TokenManager, TokenStore};
use crate::config::ClientConfig;
use crate::http::{HevaError, Result};

/// Single point of contact with the HEVA backend.
///
/// Owns the bearer token: every authenticated request carries it, and a
/// `401` on such a request clears it and surfaces [`HevaError::SessionExpired`].
#[derive(Debug)]
pub struct HevaClient {
    http_client: Client,
    base_url: Url,
    tokens: TokenManager,
    allow_offline_demo_session: bool,
}

impl HevaClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client whose token lives in the file named by the configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let store = FileTokenStore::new(config.storage_path());
        Self::with_store(config, store)
    }

    /// Create a client over an explicit token store
    pub fn with_store(config: ClientConfig, store: impl TokenStore + 'static) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            tokens: TokenManager::load(Arc::new(store))?,
            allow_offline_demo_session: config.allow_offline_demo_session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    pub fn allows_offline_demo_session(&self) -> bool {
        self.allow_offline_demo_session
    }

    /// Store a token for subsequent authenticated requests. No shape validation.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.tokens.set_token(token)?;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get_token()
    }

    /// True iff a token is held in memory. Not verified against the server.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.has_token()
    }

    /// Headers for authenticated calls: JSON content type plus the bearer token
    pub fn auth_headers(&self) -> Result<HeaderMap> {
        let token = self.tokens.get_token().ok_or(HevaError::MissingToken)?;

        let mut headers = json_headers();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))?,
        );
        Ok(headers)
    }

    /// Build full URL for an endpoint relative to the `/api` base
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for endpoints that need no token
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url).headers(json_headers()))
    }

    /// Build request builder carrying the bearer token
    pub(crate) fn authed_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let headers = self.auth_headers()?;
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url).headers(headers))
    }

    /// Send an unauthenticated request; any non-2xx status becomes `failure`
    pub(crate) async fn send_public_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        failure: &'static str,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, failure, "public request rejected");
            return Err(HevaError::api_error(status, failure));
        }
        decode(response).await
    }

    /// Send an authenticated request through the session interceptor.
    ///
    /// A `401` logs the session out locally before returning `SessionExpired`;
    /// other non-2xx statuses become `failure`.
    pub(crate) async fn send_authed_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        failure: &'static str,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(failure, "bearer token rejected, clearing local session");
            self.logout()?;
            return Err(HevaError::SessionExpired);
        }
        if !status.is_success() {
            debug!(%status, failure, "request rejected");
            return Err(HevaError::api_error(status, failure));
        }
        decode(response).await
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// `Url::join` drops the last segment of a base without a trailing slash
fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
