//! Domain entities

pub mod account;
pub mod pending_registration;
pub mod token;

pub use account::{Account, AuthProvider, Role};
pub use pending_registration::PendingRegistration;
pub use token::{Claims, TokenPair};
