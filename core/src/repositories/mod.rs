//! Repository traits for account and pending-registration persistence.
//!
//! The traits in this module form the boundary between the domain services
//! and whatever storage backs them. Production implementations live in the
//! infrastructure crate; mock implementations live alongside each trait for
//! use in service tests.

pub mod account;
pub mod pending_registration;

pub use account::AccountRepository;
pub use pending_registration::PendingRegistrationRepository;

#[cfg(any(test, feature = "mocks"))]
pub use account::MockAccountRepository;
#[cfg(any(test, feature = "mocks"))]
pub use pending_registration::MockPendingRegistrationRepository;
