/*
[INPUT]:  HTTP client configuration and HEVA API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;

pub use client::HevaClient;
pub use error::{HevaError, Result};
