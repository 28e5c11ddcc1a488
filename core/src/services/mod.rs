//! Domain services.
//!
//! The authentication service orchestrates the repositories and the smaller
//! services in this module. Everything here is storage-agnostic; concrete
//! repositories and the mail client are injected by the composition root.

pub mod auth;
pub mod notification;
pub mod password;
pub mod token;

pub use auth::{AuthService, RegisterOutcome};
pub use notification::NotificationDispatcher;
pub use password::PasswordHasher;
pub use token::TokenService;
