//! Shared configuration types for the Authify server
//!
//! This crate provides the configuration structs used across all server
//! modules. Everything is loadable from environment variables with
//! development defaults, so a bare `cargo run` works against a local stack.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, JwtConfig, LockoutConfig, MailConfig, OAuthConfig,
    ServerConfig,
};
