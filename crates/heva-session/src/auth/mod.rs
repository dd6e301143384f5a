/*
[INPUT]:  Credentials, registration forms and a durable token store
[OUTPUT]: Session state, stored tokens, validation errors and notifications
[POS]:    Auth layer - client-side session and access control
[UPDATE]: When session flow, storage or form rules change
*/

pub mod forms;
pub mod notify;
pub mod session;
pub mod store;
pub mod token;

pub use forms::{LoginForm, RegistrationForm, ValidationError, MIN_PASSWORD_LENGTH};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use session::{SessionManager, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
pub use token::{PROFILE_KEY, TOKEN_KEY, TokenManager};
