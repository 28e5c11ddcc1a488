//! Domain layer: entities, one-time-passcode rules, and value objects

pub mod entities;
pub mod otp;
pub mod value_objects;

pub use entities::{Account, AuthProvider, Claims, PendingRegistration, Role, TokenPair};
pub use value_objects::AuthenticatedSession;
