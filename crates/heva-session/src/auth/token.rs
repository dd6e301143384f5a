/*
[INPUT]:  Bearer tokens and user profiles from auth responses
[OUTPUT]: In-memory token cache mirrored to durable storage
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When adding token refresh or changing storage keys
*/

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use super::store::{StoreError, TokenStore};
use crate::types::UserProfile;

/// Durable key holding the bearer token
pub const TOKEN_KEY: &str = "heva_token";
/// Durable key holding the JSON profile of the token's owner
pub const PROFILE_KEY: &str = "heva_user";

/// Thread-safe token holder.
///
/// The in-memory copy is the source of truth for request headers; the store
/// only matters across restarts.
#[derive(Debug, Clone)]
pub struct TokenManager {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl TokenManager {
    /// Create a manager and pick up a token left in the store by a previous run.
    ///
    /// A corrupt store counts as empty; the next write replaces it.
    pub fn load(store: Arc<dyn TokenStore>) -> Result<Self, StoreError> {
        let token = match store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(StoreError::Corrupt(reason)) => {
                warn!(%reason, "token store unreadable, starting without a token");
                None
            }
            Err(err) => return Err(err),
        };
        if token.is_some() {
            debug!("restored bearer token from store");
        }

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    /// Store a new token in memory and in the durable store
    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        self.store.set(TOKEN_KEY, token)
    }

    pub fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json)
    }

    /// Profile persisted next to the token. An unreadable entry counts as absent.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        let raw = match self.store.get(PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(StoreError::Corrupt(reason)) => {
                warn!(%reason, "token store unreadable, no stored profile");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(error = %err, "discarding unreadable stored profile");
                Ok(None)
            }
        }
    }

    /// Forget the token and profile, in memory and on disk
    pub fn clear(&self) -> Result<(), StoreError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(PROFILE_KEY)
    }
}
