//! Password hashing and verification on top of bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Hashes and checks passwords with bcrypt
///
/// The cost factor comes from configuration so tests can run with a cheap
/// cost while production uses a slow one.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plain: &str) -> DomainResult<String> {
        hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A malformed digest counts as a mismatch rather than an error.
    pub fn verify(&self, plain: &str, digest: &str) -> bool {
        verify(plain, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
