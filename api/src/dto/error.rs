//! Uniform error envelope for non-domain failures

use chrono::Utc;
use serde::Serialize;

/// Error body returned for validation, transport, and server failures
///
/// Domain outcomes (wrong OTP, bad password, locked account) never use this
/// shape; they ride the success-shaped [`AuthResponse`](super::AuthResponse)
/// with `success: false`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    pub timestamp: String,
    pub path: String,
}

impl ApiError {
    /// Build an envelope stamped with the current UTC time
    pub fn new(
        message: impl Into<String>,
        error_code: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code: error_code.into(),
            timestamp: Utc::now().to_rfc3339(),
            path: path.into(),
        }
    }
}
