/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public HEVA session client surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod guard;
pub mod http;
pub mod routes;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    FileTokenStore,
    LoginForm,
    MemoryTokenStore,
    Notification,
    NotificationLevel,
    RegistrationForm,
    SessionManager,
    SessionState,
    TokenStore,
    ValidationError,
};

pub use config::ClientConfig;

pub use guard::{GuardDecision, GuardMode, RouteGuard};

// Re-export commonly used types from http
pub use http::{
    HevaClient,
    HevaError,
    Result,
};

// Re-export all types
pub use types::*;
