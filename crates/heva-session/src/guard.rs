/*
[INPUT]:  Session state, guard configuration, requested location
[OUTPUT]: Render / loading / redirect decision for a protected view
[POS]:    Navigation layer - role-based access control for views
[UPDATE]: When guard outcomes or authentication modes change
*/

use crate::auth::SessionState;
use crate::routes::{self, HOME_ROUTE, LOGIN_ROUTE};
use crate::types::RequiredRole;

/// Whether the guard insists on a logged-in session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardMode {
    /// Anonymous visitors pass unless a role is required
    Optional,
    #[default]
    RequireAuthentication,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show the placeholder, never redirect
    ShowLoading,
    /// Go to the login view and come back to `from` afterwards
    RedirectToLogin { login: &'static str, from: String },
    /// Show the access-denied notice, then go to `redirect_to`
    AccessDenied { redirect_to: &'static str },
    Render,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteGuard {
    mode: GuardMode,
    required_role: Option<RequiredRole>,
}

impl RouteGuard {
    pub fn new(mode: GuardMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    /// Guard for a path, with the role implied by its area
    pub fn for_path(path: &str, mode: GuardMode) -> Self {
        Self {
            mode,
            required_role: routes::required_role_for_path(path),
        }
    }

    pub fn require_role(mut self, role: RequiredRole) -> Self {
        self.required_role = Some(role);
        self
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    pub fn required_role(&self) -> Option<RequiredRole> {
        self.required_role
    }

    pub fn evaluate(&self, state: &SessionState, location: &str) -> GuardDecision {
        if state.is_loading() {
            return GuardDecision::ShowLoading;
        }

        if self.mode == GuardMode::RequireAuthentication && !state.is_authenticated() {
            return GuardDecision::RedirectToLogin {
                login: LOGIN_ROUTE,
                from: location.to_string(),
            };
        }

        if let Some(role) = self.required_role {
            if !state.has_role(role) {
                return GuardDecision::AccessDenied {
                    redirect_to: HOME_ROUTE,
                };
            }
        }

        GuardDecision::Render
    }
}
