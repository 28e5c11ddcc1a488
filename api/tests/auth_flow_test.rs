//! End-to-end flows through the assembled application
//!
//! Drives the real routes with in-memory stores and a recording mailer:
//! registration through verification, login, refresh, and password
//! recovery, asserting the exact wire messages the front-end matches on.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::header;
use actix_web::{test, web};

use authify_api::app::create_app;
use authify_api::routes::auth::AppState;
use authify_core::repositories::{MockAccountRepository, MockPendingRegistrationRepository};
use authify_core::services::notification::{MockNotificationDispatcher, SentMail};
use authify_core::{AuthService, PasswordHasher, TokenService};
use authify_infra::oauth::GoogleOAuthClient;
use authify_shared::{JwtConfig, LockoutConfig, OAuthConfig};

type MockState =
    AppState<MockAccountRepository, MockPendingRegistrationRepository, MockNotificationDispatcher>;

struct TestHarness {
    state: web::Data<MockState>,
    mailer: Arc<MockNotificationDispatcher>,
}

fn harness() -> TestHarness {
    let accounts = Arc::new(MockAccountRepository::new());
    let pending = Arc::new(MockPendingRegistrationRepository::new());
    let mailer = Arc::new(MockNotificationDispatcher::new());
    let tokens = Arc::new(TokenService::new(JwtConfig::new("api-flow-test-secret")));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        pending,
        Arc::clone(&tokens),
        Arc::clone(&mailer),
        PasswordHasher::new(4),
        LockoutConfig::default(),
    ));

    let oauth_config = OAuthConfig::default();
    let state = web::Data::new(AppState {
        auth_service,
        accounts,
        token_service: tokens,
        oauth_client: GoogleOAuthClient::new(oauth_config.clone()),
        oauth_config,
        frontend_origin: "http://localhost:5173".to_string(),
    });

    TestHarness { state, mailer }
}

/// Mail is dispatched on spawned tasks; poll until the code arrives
async fn wait_for_verification_otp(mailer: &MockNotificationDispatcher, email: &str) -> String {
    for _ in 0..100 {
        for mail in mailer.sent().await {
            if let SentMail::VerificationOtp { to, otp } = mail {
                if to == email {
                    return otp;
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("verification OTP for {} was never dispatched", email);
}

async fn wait_for_reset_otp(mailer: &MockNotificationDispatcher, email: &str) -> String {
    for _ in 0..100 {
        for mail in mailer.sent().await {
            if let SentMail::PasswordResetOtp { to, otp } = mail {
                if to == email {
                    return otp;
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("password reset OTP for {} was never dispatched", email);
}

#[actix_web::test]
async fn test_full_account_lifecycle() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    // Register
    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered! Please verify your email.");
    assert!(body["token"].is_null());

    // Verify with the emailed code
    let otp = wait_for_verification_otp(&harness.mailer, "alice@example.com").await;
    let request = test::TestRequest::post()
        .uri("/auth/verify-otp")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "otp": otp,
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email verified successfully");
    assert!(body["token"].is_string());
    assert!(body["refreshToken"].is_string());
    assert_eq!(body["role"], "USER");
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "alice@example.com");

    let access_token = body["token"].as_str().unwrap().to_string();

    // The issued access token opens the protected profile route
    let request = test::TestRequest::get()
        .uri("/api/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["role"], "USER");

    // Login with the password
    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "password123",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful!");
    assert!(body["token"].is_string());

    let refresh = body["refreshToken"].as_str().unwrap().to_string();

    // Refresh echoes the same refresh token back
    let request = test::TestRequest::post()
        .uri(&format!("/auth/refresh-token?refreshToken={}", refresh))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Token refreshed!");
    assert!(body["token"].is_string());
    assert_eq!(body["refreshToken"], refresh.as_str());
    assert_eq!(body["user"]["email"], "alice@example.com");

    // Password recovery
    let request = test::TestRequest::post()
        .uri("/auth/forgot-password")
        .set_json(serde_json::json!({"email": "alice@example.com"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password reset OTP sent to your email");

    let reset_otp = wait_for_reset_otp(&harness.mailer, "alice@example.com").await;
    let request = test::TestRequest::post()
        .uri("/auth/reset-password")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "otp": reset_otp,
            "newPassword": "brand-new-pass",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password reset successfully");

    // New password works, old one is refused
    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "brand-new-pass",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);

    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "password123",
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid password");
}

#[actix_web::test]
async fn test_register_retry_resends_code() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let payload = serde_json::json!({
        "name": "Bob",
        "email": "bob@example.com",
        "password": "password123",
    });

    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(payload.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["message"], "User registered! Please verify your email.");

    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP sent again! Please verify your email.");
}

#[actix_web::test]
async fn test_resend_otp_targets_verified_accounts() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    // A signup that is still pending has no account to resend against
    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(serde_json::json!({
            "name": "Carol",
            "email": "carol@example.com",
            "password": "password123",
        }))
        .to_request();
    let _: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/auth/resend-otp?email=carol@example.com")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");

    // Once verified, the resend channel works
    let otp = wait_for_verification_otp(&harness.mailer, "carol@example.com").await;
    let request = test::TestRequest::post()
        .uri("/auth/verify-otp")
        .set_json(serde_json::json!({
            "email": "carol@example.com",
            "otp": otp,
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);

    let request = test::TestRequest::post()
        .uri("/auth/resend-otp?email=carol@example.com")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP resent successfully");
}

#[actix_web::test]
async fn test_liveness_routes() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let request = test::TestRequest::get().uri("/auth/test").to_request();
    let body = test::call_and_read_body(&app, request).await;
    assert_eq!(&body[..], b"works");

    let request = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "authify-api");
    assert!(body["version"].is_string());
}
