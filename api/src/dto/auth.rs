//! Authentication request and response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use authify_core::{Account, AuthenticatedSession};

/// Request body for POST /auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request body for POST /auth/verify-otp
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "OTP must be exactly 6 digits"))]
    pub otp: String,
}

/// Request body for POST /auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for POST /auth/forgot-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Request body for POST /auth/reset-password
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "OTP must be exactly 6 digits"))]
    pub otp: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Query string for POST /auth/resend-otp?email=
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResendOtpQuery {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Query string for POST /auth/refresh-token?refreshToken=
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenQuery {
    pub refresh_token: String,
}

/// Compact account view embedded in token-bearing responses
/// and returned from GET /api/me
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserSummary {
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role.as_str().to_string(),
        }
    }
}

/// Uniform body for every /auth endpoint
///
/// Field names and the `null`s for absent fields are part of the wire
/// contract with the existing front-end, so nothing here is skipped
/// during serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: Option<String>,
    pub success: bool,
    pub refresh_token: Option<String>,
    pub role: Option<String>,
    pub user: Option<UserSummary>,
}

impl AuthResponse {
    /// Success without tokens (register, resend, forgot/reset password)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
            success: true,
            refresh_token: None,
            role: None,
            user: None,
        }
    }

    /// Domain failure reported with HTTP 200 and `success: false`
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
            success: false,
            refresh_token: None,
            role: None,
            user: None,
        }
    }

    /// Success carrying a full token pair plus the account summary
    pub fn with_session(message: impl Into<String>, session: &AuthenticatedSession) -> Self {
        Self {
            message: message.into(),
            token: Some(session.tokens.access_token.clone()),
            success: true,
            refresh_token: Some(session.tokens.refresh_token.clone()),
            role: Some(session.account.role.as_str().to_string()),
            user: Some(UserSummary::from_account(&session.account)),
        }
    }
}
