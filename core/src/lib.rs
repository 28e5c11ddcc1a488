//! # Authify Core
//!
//! Core business logic and domain layer for the Authify backend.
//! This crate contains the domain entities, the authentication state
//! machines, the token codec, the store interfaces, and the error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, AuthProvider, Claims, PendingRegistration, Role, TokenPair};
pub use domain::value_objects::AuthenticatedSession;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{AccountRepository, PendingRegistrationRepository};
pub use services::auth::{AuthService, RegisterOutcome};
pub use services::notification::NotificationDispatcher;
pub use services::password::PasswordHasher;
pub use services::token::TokenService;
