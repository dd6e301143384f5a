/*
[INPUT]:  HEVA client, credentials, registration forms
[OUTPUT]: Session state (loading / anonymous / authenticated) and role queries
[POS]:    Auth layer - orchestrates the session lifecycle for the UI
[UPDATE]: When session transitions, notifications or startup policy change
*/

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::forms::{LoginForm, RegistrationForm};
use super::notify::{Notification, Notifier};
use crate::http::{HevaClient, HevaError, Result};
use crate::routes;
use crate::types::{
    AuthResponse, DashboardAnalytics, FinancialEntry, NewFinancialEntry, NewStory, RequiredRole,
    Story, UserAnalytics, UserProfile, UserType,
};

const LOGIN_SUCCESS: &str = "Login successful!";
const LOGIN_FAILURE: &str = "Login failed. Please check your credentials.";
const REGISTER_SUCCESS: &str = "Registration successful!";
const REGISTER_FAILURE: &str = "Registration failed. Please try again.";
const LOGOUT_SUCCESS: &str = "Logged out successfully";
const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
const DEMO_SESSION: &str = "Backend unavailable. You are using an offline demo session.";

/// Where the session stands.
///
/// `Authenticated` always carries the profile; a token alone never puts the
/// session in that state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.profile().map(|profile| profile.user_type)
    }

    /// Whether the current profile satisfies `role`. False without a profile.
    pub fn has_role(&self, role: RequiredRole) -> bool {
        self.user_type()
            .is_some_and(|user_type| role.is_satisfied_by(user_type))
    }
}

/// Owns the API client and the session state machine.
///
/// Clones share state, client and notification stream.
#[derive(Debug, Clone)]
pub struct SessionManager {
    client: Arc<HevaClient>,
    state: Arc<RwLock<SessionState>>,
    notifier: Notifier,
}

impl SessionManager {
    /// Wrap a client. The session starts in `Loading` until [`initialize`](Self::initialize).
    pub fn new(client: HevaClient) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(RwLock::new(SessionState::Loading)),
            notifier: Notifier::new(),
        }
    }

    pub fn client(&self) -> &HevaClient {
        &self.client
    }

    /// Toast stream for the host UI. Available once.
    pub fn take_notifications(&self) -> Option<mpsc::Receiver<Notification>> {
        self.notifier.take_receiver()
    }

    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_state(&self, state: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state().profile().cloned()
    }

    /// Resolve the startup state from durable storage.
    ///
    /// A stored token only counts together with the profile persisted beside
    /// it; a token without a readable profile is discarded.
    pub fn initialize(&self) -> Result<SessionState> {
        let state = if !self.client.is_authenticated() {
            SessionState::Anonymous
        } else {
            match self.client.tokens().load_profile()? {
                Some(profile) => {
                    info!(user_type = profile.user_type.as_str(), "restored session");
                    SessionState::Authenticated(profile)
                }
                None => {
                    warn!("stored token has no profile, discarding it");
                    self.client.logout()?;
                    SessionState::Anonymous
                }
            }
        };

        self.set_state(state.clone());
        Ok(state)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.set_state(SessionState::Loading);

        let outcome = match self.client.login(email, password).await {
            Ok(response) => self.remember(response),
            Err(err) => Err(err),
        };
        let settled = self.settle(outcome, LOGIN_SUCCESS, LOGIN_FAILURE);
        if settled.as_ref().is_ok_and(AuthResponse::is_demo) {
            self.notifier.info(DEMO_SESSION);
        }
        settled
    }

    /// Validate the login form locally, then log in
    pub async fn login_with(&self, form: &LoginForm) -> Result<AuthResponse> {
        form.validate()?;
        self.login(&form.email, &form.password).await
    }

    /// Validate the form locally, then register.
    ///
    /// A validation failure returns before any network call and leaves the
    /// session untouched.
    pub async fn register(&self, form: RegistrationForm) -> Result<AuthResponse> {
        let payload = form.validate()?;
        self.set_state(SessionState::Loading);

        let outcome = match self.client.register(&payload).await {
            Ok(response) => self.remember(response),
            Err(err) => Err(err),
        };
        self.settle(outcome, REGISTER_SUCCESS, REGISTER_FAILURE)
    }

    pub fn logout(&self) -> Result<()> {
        let cleared = self.client.logout();
        self.set_state(SessionState::Anonymous);
        self.notifier.success(LOGOUT_SUCCESS);
        cleared
    }

    pub fn is_admin(&self) -> bool {
        self.state().has_role(RequiredRole::Admin)
    }

    pub fn is_agent(&self) -> bool {
        self.state().has_role(RequiredRole::Agent)
    }

    pub fn is_creative(&self) -> bool {
        self.state().has_role(RequiredRole::Creative)
    }

    pub fn has_role(&self, role: RequiredRole) -> bool {
        self.state().has_role(role)
    }

    /// Landing route for the logged-in user
    pub fn home_route(&self) -> Option<&'static str> {
        self.state().user_type().map(routes::landing_route)
    }

    pub async fn stories(&self) -> Result<Vec<Story>> {
        let result = self.client.get_stories().await;
        self.observe(result)
    }

    pub async fn create_story(&self, story: &NewStory) -> Result<Story> {
        let result = self.client.create_story(story).await;
        self.observe(result)
    }

    pub async fn financial_entries(&self) -> Result<Vec<FinancialEntry>> {
        let result = self.client.get_financial_entries().await;
        self.observe(result)
    }

    pub async fn create_financial_entry(&self, entry: &NewFinancialEntry) -> Result<FinancialEntry> {
        let result = self.client.create_financial_entry(entry).await;
        self.observe(result)
    }

    pub async fn user_analytics(&self) -> Result<UserAnalytics> {
        let result = self.client.get_user_analytics().await;
        self.observe(result)
    }

    pub async fn dashboard_analytics(&self) -> Result<DashboardAnalytics> {
        let result = self.client.get_dashboard_analytics().await;
        self.observe(result)
    }

    fn remember(&self, response: AuthResponse) -> Result<AuthResponse> {
        self.client.tokens().save_profile(&response.user)?;
        Ok(response)
    }

    fn settle(
        &self,
        outcome: Result<AuthResponse>,
        success: &str,
        failure: &str,
    ) -> Result<AuthResponse> {
        match outcome {
            Ok(response) => {
                self.set_state(SessionState::Authenticated(response.user.clone()));
                self.notifier.success(success);
                Ok(response)
            }
            Err(err) => {
                debug!(error = %err, "authentication attempt failed");
                self.set_state(SessionState::Anonymous);
                self.notifier.error(failure);
                Err(err)
            }
        }
    }

    /// Turn a rejected token into an anonymous session
    fn observe<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(HevaError::SessionExpired) = &result {
            self.set_state(SessionState::Anonymous);
            self.notifier.error(SESSION_EXPIRED);
        }
        result
    }
}
