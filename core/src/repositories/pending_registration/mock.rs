//! Mock implementation of PendingRegistrationRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::pending_registration::PendingRegistration;
use crate::errors::DomainResult;

use super::PendingRegistrationRepository;

/// Mock pending registration repository for testing
pub struct MockPendingRegistrationRepository {
    entries: Arc<RwLock<HashMap<String, PendingRegistration>>>,
}

impl MockPendingRegistrationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockPendingRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PendingRegistrationRepository for MockPendingRegistrationRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<PendingRegistration>> {
        let entries = self.entries.read().await;
        Ok(entries.get(email).cloned())
    }

    async fn upsert(&self, registration: PendingRegistration) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(registration.email.clone(), registration);
        Ok(())
    }

    async fn delete(&self, email: &str) -> DomainResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(email).is_some())
    }
}
