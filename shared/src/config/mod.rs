//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT, password hashing, and login lockout configuration
//! - `database` - Database connection and pool configuration
//! - `mail` - Outbound email (SendGrid) configuration
//! - `oauth` - Google OAuth and front-end redirect configuration
//! - `server` - HTTP server and CORS origin configuration

pub mod auth;
pub mod database;
pub mod mail;
pub mod oauth;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, LockoutConfig};
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use oauth::OAuthConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Outbound email configuration
    pub mail: MailConfig,

    /// OAuth provider configuration
    pub oauth: OAuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
            oauth: OAuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
            oauth: OAuthConfig::from_env(),
        }
    }
}
