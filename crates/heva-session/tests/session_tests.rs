/*
[INPUT]:  Mock backend responses and user-entered forms
[OUTPUT]: Test results for the session lifecycle
[POS]:    Integration tests - login, registration, logout and expiry flows
[UPDATE]: When session transitions or notification wording change
*/

mod common;

use common::{auth_body, config_for, session_for, setup_mock_server};
use heva_session::auth::{PROFILE_KEY, TOKEN_KEY, TokenStore};
use heva_session::{
    ClientConfig, CreativeDetails, CreativeMedium, ExperienceLevel, Gender, GuardDecision,
    HevaClient, HevaError, MemoryTokenStore, NotificationLevel, RegistrationForm, RoleDetails,
    RouteGuard, SessionManager, SessionState, UserType, ValidationError,
};
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn creative_form() -> RegistrationForm {
    let mut form = RegistrationForm::new(UserType::Creative);
    form.email = "a@b.com".to_string();
    form.password = "longenough1".to_string();
    form.confirm_password = "longenough1".to_string();
    form.full_name = "Achieng Otieno".to_string();
    form.phone = "+254700000000".to_string();
    form.gender = Gender::Female;
    form.marginalized_groups = vec!["refugee".to_string()];
    form.role = RoleDetails::Creative(CreativeDetails {
        creative_skills: "weaving".to_string(),
        portfolio_url: String::new(),
        experience_level: ExperienceLevel::Intermediate,
        preferred_medium: CreativeMedium::Traditional,
    });
    form
}

#[tokio::test]
async fn test_agent_login_lands_on_agent_dashboard() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok123", "field_agent")))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &store);
    assert_eq!(session.state(), SessionState::Anonymous);

    let mut notifications = session.take_notifications().unwrap();
    assert_ok!(session.login("a@b.com", "secret-pass").await);

    assert!(session.is_authenticated());
    assert!(session.is_agent());
    assert!(!session.is_admin());
    assert_eq!(session.home_route(), Some("/agent/dashboard"));
    assert_eq!(assert_ok!(store.get(TOKEN_KEY)), Some("tok123".to_string()));

    let toast = notifications.try_recv().unwrap();
    assert_eq!(toast.level, NotificationLevel::Success);
    assert_eq!(toast.message, "Login successful!");
}

#[tokio::test]
async fn test_session_restored_after_restart() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok123", "creative")))
        .mount(&server)
        .await;

    let first = session_for(&server, &store);
    assert_ok!(first.login("a@b.com", "secret-pass").await);
    drop(first);

    let restarted = session_for(&server, &store);
    assert!(restarted.is_creative());
    assert_eq!(restarted.user().unwrap().full_name, "Achieng Otieno");
    assert_eq!(restarted.client().token(), Some("tok123".to_string()));
}

#[tokio::test]
async fn test_logout_clears_durable_storage() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok123", "admin")))
        .mount(&server)
        .await;

    let session = session_for(&server, &store);
    assert_ok!(session.login("a@b.com", "secret-pass").await);
    assert!(session.is_admin());

    assert_ok!(session.logout());

    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(!session.client().is_authenticated());
    assert_eq!(assert_ok!(store.get(TOKEN_KEY)), None);
    assert_eq!(assert_ok!(store.get(PROFILE_KEY)), None);

    let restarted = session_for(&server, &store);
    assert_eq!(restarted.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_failed_login_stays_anonymous() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &store);
    let mut notifications = session.take_notifications().unwrap();

    let err = session.login("a@b.com", "secret-pass").await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(assert_ok!(store.get(TOKEN_KEY)), None);

    let toast = notifications.try_recv().unwrap();
    assert_eq!(toast.level, NotificationLevel::Error);
    assert_eq!(toast.message, "Login failed. Please check your credentials.");
}

#[tokio::test]
async fn test_demo_login_when_backend_errors() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = ClientConfig {
        allow_offline_demo_session: true,
        ..config_for(&server)
    };
    let session = SessionManager::new(assert_ok!(HevaClient::with_store(config, store.clone())));
    assert_ok!(session.initialize());
    let mut notifications = session.take_notifications().unwrap();

    let response = assert_ok!(session.login("a@b.com", "anything").await);
    assert!(response.is_demo());
    assert!(session.is_creative());
    assert_eq!(session.user().unwrap().email, "a@b.com");
    assert_eq!(session.home_route(), Some("/creative/dashboard"));

    assert_eq!(notifications.try_recv().unwrap().message, "Login successful!");
    let notice = notifications.try_recv().unwrap();
    assert_eq!(notice.level, NotificationLevel::Info);
    assert!(notice.message.contains("offline demo session"));
}

async fn wait_for_loading(session: &SessionManager) {
    for _ in 0..100 {
        if session.is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_loading_while_login_in_flight() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(auth_body("tok123", "field_agent"))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &MemoryTokenStore::new());
    let pending = tokio::spawn({
        let session = session.clone();
        async move { session.login("a@b.com", "secret-pass").await }
    });

    wait_for_loading(&session).await;
    assert_eq!(session.state(), SessionState::Loading);
    assert_eq!(
        RouteGuard::for_path("/agent/dashboard", Default::default())
            .evaluate(&session.state(), "/agent/dashboard"),
        GuardDecision::ShowLoading
    );

    assert_ok!(pending.await.unwrap());
    assert!(session.is_agent());
}

#[tokio::test]
async fn test_loading_while_registration_in_flight() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(auth_body("fresh", "creative"))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &MemoryTokenStore::new());
    let pending = tokio::spawn({
        let session = session.clone();
        async move { session.register(creative_form()).await }
    });

    wait_for_loading(&session).await;
    assert_eq!(session.state(), SessionState::Loading);
    assert_eq!(
        RouteGuard::default().evaluate(&session.state(), "/creative/dashboard"),
        GuardDecision::ShowLoading
    );

    assert_ok!(pending.await.unwrap());
    assert!(session.is_creative());
}

#[tokio::test]
async fn test_register_sends_form_without_confirmation() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "password": "longenough1",
            "full_name": "Achieng Otieno",
            "phone": "+254700000000",
            "gender": "female",
            "disability": false,
            "disability_type": "",
            "marginalized_groups": ["refugee"],
            "primary_device": "smartphone",
            "literacy_level": "intermediate",
            "consent_data_collection": true,
            "consent_contact": true,
            "user_type": "creative",
            "creative_skills": "weaving",
            "portfolio_url": "",
            "experience_level": "intermediate",
            "preferred_medium": "traditional",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_body("fresh", "creative")))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &store);
    let mut notifications = session.take_notifications().unwrap();

    let response = assert_ok!(session.register(creative_form()).await);
    assert_eq!(response.access, "fresh");
    assert!(session.is_creative());
    assert_eq!(assert_ok!(store.get(TOKEN_KEY)), Some("fresh".to_string()));
    assert_eq!(
        notifications.try_recv().unwrap().message,
        "Registration successful!"
    );
}

#[tokio::test]
async fn test_short_password_never_reaches_backend() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_body("fresh", "creative")))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server, &MemoryTokenStore::new());
    let mut notifications = session.take_notifications().unwrap();

    let mut form = creative_form();
    form.password = "short".to_string();
    form.confirm_password = "short".to_string();

    let err = session.register(form).await.unwrap_err();
    assert!(matches!(
        err,
        HevaError::Validation(ValidationError::PasswordTooShort { min: 8 })
    ));
    assert!(err.is_validation_error());
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(notifications.try_recv().is_err());
}

#[tokio::test]
async fn test_registration_rejected_by_backend() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "email": ["user with this email already exists."],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &MemoryTokenStore::new());
    let mut notifications = session.take_notifications().unwrap();

    assert!(session.register(creative_form()).await.is_err());
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(
        notifications.try_recv().unwrap().message,
        "Registration failed. Please try again."
    );
}

#[tokio::test]
async fn test_expired_token_logs_session_out() {
    let server = setup_mock_server().await;
    let store = MemoryTokenStore::new();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok123", "creative")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stories/stories/"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &store);
    let mut notifications = session.take_notifications().unwrap();
    assert_ok!(session.login("a@b.com", "secret-pass").await);
    assert_eq!(notifications.try_recv().unwrap().message, "Login successful!");

    let err = session.stories().await.unwrap_err();
    assert!(matches!(err, HevaError::SessionExpired));
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(assert_ok!(store.get(TOKEN_KEY)), None);
    assert_eq!(
        notifications.try_recv().unwrap().message,
        "Session expired. Please log in again."
    );
}

#[tokio::test]
async fn test_dashboard_analytics_for_admin() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok123", "heva_team")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "overview": {"total_users": 42},
            "users": {"creatives": 30},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server, &MemoryTokenStore::new());
    assert_ok!(session.login("a@b.com", "secret-pass").await);
    assert!(session.is_admin());
    assert_eq!(session.home_route(), Some("/admin"));

    let analytics = assert_ok!(session.dashboard_analytics().await);
    assert_eq!(
        analytics.section("overview").unwrap()["total_users"],
        serde_json::json!(42)
    );
}
