//! Authentication service module
//!
//! Drives the complete account lifecycle:
//! - Registration staging and OTP verification
//! - Credential and federated login
//! - Password recovery
//! - Access-token refresh

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, RegisterOutcome};
