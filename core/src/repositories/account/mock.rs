//! Mock implementation of AccountRepository for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult};

use super::AccountRepository;

/// Mock account repository for testing
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail with a database error
    pub fn fail_all(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Seed an account directly, assigning an id when none is set
    pub async fn seed(&self, mut account: Account) -> Account {
        if account.id == 0 {
            account.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id, account.clone());
        account
    }

    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn check_fail(&self) -> DomainResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated storage failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        self.check_fail()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.check_fail()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        self.check_fail()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }

    async fn create(&self, account: &Account) -> DomainResult<Account> {
        self.check_fail()?;
        let mut accounts = self.accounts.write().await;

        // The accounts table carries a unique index on email
        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Database {
                message: format!("duplicate email: {}", account.email),
            });
        }

        let mut created = account.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        accounts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, account: &Account) -> DomainResult<()> {
        self.check_fail()?;
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::Database {
                message: format!("no account with id {}", account.id),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(())
    }
}
