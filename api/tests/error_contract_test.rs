//! Error contract across the HTTP surface
//!
//! Domain outcomes ride HTTP 200 with `success: false`; validation and
//! transport problems use 400 with the error envelope; storage failures
//! surface as 500. The front-end distinguishes the cases by shape, so
//! these assertions pin both status codes and bodies.

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web};

use authify_api::app::create_app;
use authify_api::routes::auth::AppState;
use authify_core::repositories::{MockAccountRepository, MockPendingRegistrationRepository};
use authify_core::services::notification::MockNotificationDispatcher;
use authify_core::{Account, AuthService, PasswordHasher, TokenService};
use authify_infra::oauth::GoogleOAuthClient;
use authify_shared::{JwtConfig, LockoutConfig, OAuthConfig};

type MockState =
    AppState<MockAccountRepository, MockPendingRegistrationRepository, MockNotificationDispatcher>;

struct TestHarness {
    state: web::Data<MockState>,
    accounts: Arc<MockAccountRepository>,
}

fn harness() -> TestHarness {
    let accounts = Arc::new(MockAccountRepository::new());
    let pending = Arc::new(MockPendingRegistrationRepository::new());
    let mailer = Arc::new(MockNotificationDispatcher::new());
    let tokens = Arc::new(TokenService::new(JwtConfig::new("api-error-test-secret")));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        pending,
        Arc::clone(&tokens),
        mailer,
        PasswordHasher::new(4),
        LockoutConfig::default(),
    ));

    let oauth_config = OAuthConfig::default();
    let state = web::Data::new(AppState {
        auth_service,
        accounts: Arc::clone(&accounts),
        token_service: tokens,
        oauth_client: GoogleOAuthClient::new(oauth_config.clone()),
        oauth_config,
        frontend_origin: "http://localhost:5173".to_string(),
    });

    TestHarness { state, accounts }
}

async fn seed_verified_account(harness: &TestHarness, email: &str, password: &str) -> Account {
    let hash = PasswordHasher::new(4).hash(password).unwrap();
    harness
        .accounts
        .seed(Account::new_local("Dave".to_string(), email.to_string(), hash))
        .await
}

#[actix_web::test]
async fn test_validation_failure_returns_envelope() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({
            "name": "Alice",
            "email": "not-an-email",
            "password": "password123",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Invalid email format");
    assert_eq!(body["path"], "/auth/register");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_duplicate_registration_is_domain_failure_not_http_error() {
    let harness = harness();
    seed_verified_account(&harness, "dave@example.com", "password123").await;
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({
            "name": "Dave",
            "email": "dave@example.com",
            "password": "password123",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "User with this email address already exists!"
    );
    assert!(body["token"].is_null());
    assert!(body["user"].is_null());
}

#[actix_web::test]
async fn test_wrong_password_is_domain_failure() {
    let harness = harness();
    seed_verified_account(&harness, "dave@example.com", "correct-password").await;
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "dave@example.com",
            "password": "wrong-password",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid password");
}

#[actix_web::test]
async fn test_verification_for_unknown_email_reports_user_not_found() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/verify-otp")
        .set_json(serde_json::json!({
            "email": "ghost@example.com",
            "otp": "123456",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_malformed_json_body_is_bad_request() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ this is not json")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "BAD_REQUEST");
    assert_eq!(body["path"], "/auth/register");
}

#[actix_web::test]
async fn test_missing_refresh_token_query_is_bad_request() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/refresh-token")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["errorCode"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_unmatched_route_returns_not_found_envelope() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::get().uri("/auth/nope").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "NOT_FOUND");
    assert_eq!(body["path"], "/auth/nope");
}

#[actix_web::test]
async fn test_storage_failure_surfaces_as_database_error() {
    let harness = harness();
    seed_verified_account(&harness, "dave@example.com", "password123").await;
    harness.accounts.fail_all(true);
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "dave@example.com",
            "password": "password123",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "DATABASE_ERROR");
    assert_eq!(body["message"], "simulated storage failure");
}
