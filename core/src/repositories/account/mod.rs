//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainResult;

/// Repository trait for Account entity persistence operations
///
/// This trait defines the contract for data access operations related to
/// accounts. Implementations handle the actual database operations while
/// keeping the domain layer free of storage concerns.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The database identifier of the account
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>>;

    /// Find an account by its email address
    ///
    /// Email is the natural key for every authentication flow.
    ///
    /// # Arguments
    /// * `email` - The email address to search for
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use authify_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("jane@example.com").await? {
    ///     Some(account) => println!("found account {}", account.id),
    ///     None => println!("no such account"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;

    /// Check whether an account exists with the given email
    ///
    /// # Returns
    /// * `Ok(true)` - An account with this email exists
    /// * `Ok(false)` - The email is unclaimed
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Create a new account
    ///
    /// # Arguments
    /// * `account` - The Account entity to persist; its `id` is ignored
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account with its database-assigned id
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, account: &Account) -> DomainResult<Account>;

    /// Update an existing account
    ///
    /// Writes all mutable columns back from the entity.
    ///
    /// # Arguments
    /// * `account` - The Account entity with updated fields
    ///
    /// # Returns
    /// * `Ok(())` - The account was updated
    /// * `Err(DomainError)` - Update failed
    async fn update(&self, account: &Account) -> DomainResult<()>;
}

#[cfg(any(test, feature = "mocks"))]
pub mod mock;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockAccountRepository;
