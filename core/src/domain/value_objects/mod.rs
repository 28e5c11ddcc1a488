//! Value objects returned by the authentication services

pub mod session;

pub use session::AuthenticatedSession;
