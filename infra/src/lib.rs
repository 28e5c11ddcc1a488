//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Authify backend.
//! It provides the concrete implementations behind the core traits:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: SendGrid implementation of the notification boundary
//! - **OAuth**: Google authorization-code client for federated login

// Re-export core error types for convenience
pub use authify_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - SendGrid mail dispatch
pub mod email;

/// OAuth module - Google authorization-code flow client
pub mod oauth;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// OAuth provider error
    #[error("OAuth provider error: {0}")]
    OAuth(String),
}
