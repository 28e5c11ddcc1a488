//! Pending registration repository trait.
//!
//! Pending registrations are keyed by email and hold a staged signup
//! together with its verification code until the code is confirmed.

use async_trait::async_trait;

use crate::domain::entities::pending_registration::PendingRegistration;
use crate::errors::DomainResult;

/// Repository trait for staged signups awaiting email verification
#[async_trait]
pub trait PendingRegistrationRepository: Send + Sync {
    /// Find a pending registration by email
    ///
    /// # Returns
    /// * `Ok(Some(PendingRegistration))` - A signup is staged for this email
    /// * `Ok(None)` - Nothing staged
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<PendingRegistration>>;

    /// Insert or replace the pending registration for its email
    ///
    /// Registering again before verification overwrites the staged entry
    /// with the fresh payload and code.
    async fn upsert(&self, registration: PendingRegistration) -> DomainResult<()>;

    /// Delete the pending registration for the given email
    ///
    /// Exactly one concurrent caller observes `true`, so the delete doubles
    /// as the claim step when promoting a verified signup.
    ///
    /// # Returns
    /// * `Ok(true)` - An entry existed and was removed by this call
    /// * `Ok(false)` - No entry to remove
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, email: &str) -> DomainResult<bool>;
}

#[cfg(any(test, feature = "mocks"))]
pub mod mock;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockPendingRegistrationRepository;
