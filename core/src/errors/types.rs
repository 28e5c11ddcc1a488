//! Authentication and token error definitions
//!
//! Display strings double as the user-facing failure messages, so they are
//! written for end users, not operators.

use thiserror::Error;

/// Failures of the registration, login, and recovery state machines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A verified account already exists for the email
    #[error("User with this email address already exists!")]
    AlreadyRegistered,

    /// No account or pending registration for the email
    #[error("User not found")]
    NotFound,

    /// Submitted code does not match the stored one
    #[error("Invalid OTP!")]
    InvalidOtp,

    /// Submitted code matched but its validity window has passed
    #[error("OTP expired!")]
    OtpExpired,

    /// Password verification failed
    #[error("Invalid password")]
    InvalidCredentials,

    /// Account exists but its email was never verified
    #[error("Please verify your email first")]
    EmailNotVerified,

    /// Too many failed login attempts
    #[error("Account is locked due to too many failed login attempts. Please try again later.")]
    AccountLocked,
}

/// Failures of the token codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature, structure, or subject check failed
    #[error("Invalid refresh token")]
    Invalid,

    /// Token was well-formed but past its expiry
    #[error("Token has expired")]
    Expired,

    /// Signing failed while issuing a token
    #[error("Failed to create token")]
    CreationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages_are_user_facing() {
        assert_eq!(
            AuthError::AlreadyRegistered.to_string(),
            "User with this email address already exists!"
        );
        assert_eq!(AuthError::NotFound.to_string(), "User not found");
        assert_eq!(AuthError::OtpExpired.to_string(), "OTP expired!");
        assert_eq!(
            AuthError::EmailNotVerified.to_string(),
            "Please verify your email first"
        );
    }
}
