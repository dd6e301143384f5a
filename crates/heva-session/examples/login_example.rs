/*
[INPUT]:  Backend URL and credentials from the environment
[OUTPUT]: Session state, landing route and guard decisions on stdout
[POS]:    Examples - end-to-end session walkthrough
[UPDATE]: When the session flow or guard API changes
*/

use heva_session::*;
use tracing_subscriber::EnvFilter;

/// Example: log in and check which views the session may open
///
/// Reads `HEVA_API_BASE_URL`, `HEVA_OFFLINE_DEMO` and `HEVA_STORAGE_PATH`,
/// plus `HEVA_EMAIL` / `HEVA_PASSWORD` for the credentials.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== HEVA Session Example ===\n");

    let config = match ClientConfig::default().with_env_overrides() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    println!("backend: {}", config.base_url);

    let client = match HevaClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let session = SessionManager::new(client);
    let mut notifications = session.take_notifications();

    match session.initialize() {
        Ok(SessionState::Authenticated(profile)) => {
            println!("✓ restored session for {}", profile.display_name());
        }
        Ok(_) => {
            let email = std::env::var("HEVA_EMAIL").unwrap_or_default();
            let password = std::env::var("HEVA_PASSWORD").unwrap_or_default();
            let form = LoginForm::new(email, password);

            if let Err(e) = session.login_with(&form).await {
                eprintln!("✗ login failed: {}", e);
            }
        }
        Err(e) => {
            eprintln!("Failed to restore session: {}", e);
            return;
        }
    }

    if let Some(rx) = notifications.as_mut() {
        while let Ok(toast) = rx.try_recv() {
            println!("[{:?}] {}", toast.level, toast.message);
        }
    }

    let state = session.state();
    if let Some(route) = session.home_route() {
        println!("\nlanding route: {}", route);
    }

    for location in ["/creative/dashboard", "/agent/dashboard", "/admin"] {
        let guard = RouteGuard::for_path(location, GuardMode::RequireAuthentication);
        println!("  {:<22} {:?}", location, guard.evaluate(&state, location));
    }
}
