//! Error types for the core domain layer
//!
//! Domain failures (unknown user, bad code, bad credentials) are ordinary
//! values here; the API layer decides how they cross the wire. Storage and
//! unexpected failures are kept separate so the boundary can map them to
//! appropriate status codes.

pub mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Top-level error type aggregating all domain failures
#[derive(Debug, Error)]
pub enum DomainError {
    /// Request data failed validation
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Underlying storage failure
    #[error("Database error: {message}")]
    Database { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Authentication flow failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Token codec failure
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Convenient result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_converts_into_domain_error() {
        let err: DomainError = AuthError::InvalidOtp.into();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));
        assert_eq!(err.to_string(), "Invalid OTP!");
    }

    #[test]
    fn test_token_error_converts_into_domain_error() {
        let err: DomainError = TokenError::Invalid.into();
        assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
    }

    #[test]
    fn test_database_error_display() {
        let err = DomainError::Database {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Database error: connection refused");
    }
}
