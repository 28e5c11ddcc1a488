//! Authentication route handlers
//!
//! This module contains all authentication endpoints:
//! - Registration and OTP verification
//! - OTP resend
//! - Credential login
//! - Password recovery (forgot/reset)
//! - Token refresh

pub mod forgot_password;
pub mod login;
pub mod refresh_token;
pub mod register;
pub mod resend_otp;
pub mod reset_password;
pub mod verify_otp;

use std::sync::Arc;

use authify_core::{
    AccountRepository, AuthService, NotificationDispatcher, PendingRegistrationRepository,
    TokenService,
};
use authify_infra::oauth::GoogleOAuthClient;
use authify_shared::OAuthConfig;

/// Application state shared across all handlers
pub struct AppState<A, P, N>
where
    A: AccountRepository + 'static,
    P: PendingRegistrationRepository + 'static,
    N: NotificationDispatcher + 'static,
{
    /// Authentication service driving the account lifecycle
    pub auth_service: Arc<AuthService<A, P, N>>,

    /// Account store, used directly by the authentication gate
    pub accounts: Arc<A>,

    /// Token codec shared between the service and the gate
    pub token_service: Arc<TokenService>,

    /// Google OAuth client for the federated login flow
    pub oauth_client: GoogleOAuthClient,

    /// OAuth redirect targets
    pub oauth_config: OAuthConfig,

    /// Front-end origin allowed by CORS
    pub frontend_origin: String,
}

/// Plain-text liveness probe at GET /auth/test
pub async fn ping() -> &'static str {
    "works"
}
