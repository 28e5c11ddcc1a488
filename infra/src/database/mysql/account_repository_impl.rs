//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts carry their verification OTP, password-reset OTP and lockout
//! state inline on the row; every mutating flow writes the full set of
//! mutable columns back.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use authify_core::domain::entities::account::{Account, AuthProvider, Role};
use authify_core::errors::{DomainError, DomainResult};
use authify_core::repositories::AccountRepository;

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, role, email_verified, \
     account_non_locked, failed_login_attempts, locked_until, auth_provider, \
     otp, otp_generated_at, otp_expiry, reset_otp, reset_otp_expiry, \
     created_at, updated_at";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get role: {}", e),
            })?;
        let provider: String = row
            .try_get("auth_provider")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get auth_provider: {}", e),
            })?;

        Ok(Account {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            role: role.parse::<Role>().map_err(|e| DomainError::Database {
                message: format!("Invalid role value: {}", e),
            })?,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get email_verified: {}", e),
                })?,
            account_non_locked: row
                .try_get("account_non_locked")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get account_non_locked: {}", e),
                })?,
            failed_login_attempts: row
                .try_get("failed_login_attempts")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get failed_login_attempts: {}", e),
                })?,
            locked_until: row
                .try_get("locked_until")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get locked_until: {}", e),
                })?,
            provider: provider
                .parse::<AuthProvider>()
                .map_err(|e| DomainError::Database {
                    message: format!("Invalid auth_provider value: {}", e),
                })?,
            otp: row.try_get("otp").map_err(|e| DomainError::Database {
                message: format!("Failed to get otp: {}", e),
            })?,
            otp_generated_at: row
                .try_get("otp_generated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get otp_generated_at: {}", e),
                })?,
            otp_expiry: row
                .try_get("otp_expiry")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get otp_expiry: {}", e),
                })?,
            reset_otp: row
                .try_get("reset_otp")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get reset_otp: {}", e),
                })?,
            reset_otp_expiry: row
                .try_get("reset_otp_expiry")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get reset_otp_expiry: {}", e),
                })?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>> {
        let query = format!(
            "SELECT {} FROM accounts WHERE id = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find account by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find account by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let query = "SELECT COUNT(*) AS count FROM accounts WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check account existence: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence count: {}", e),
        })?;

        Ok(count > 0)
    }

    async fn create(&self, account: &Account) -> DomainResult<Account> {
        let query = r#"
            INSERT INTO accounts (
                name, email, password_hash, role, email_verified,
                account_non_locked, failed_login_attempts, locked_until,
                auth_provider, otp, otp_generated_at, otp_expiry,
                reset_otp, reset_otp_expiry, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.email_verified)
            .bind(account.account_non_locked)
            .bind(account.failed_login_attempts)
            .bind(account.locked_until)
            .bind(account.provider.as_str())
            .bind(&account.otp)
            .bind(account.otp_generated_at)
            .bind(account.otp_expiry)
            .bind(&account.reset_otp)
            .bind(account.reset_otp_expiry)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create account: {}", e),
            })?;

        let mut created = account.clone();
        created.id = result.last_insert_id() as i64;
        Ok(created)
    }

    async fn update(&self, account: &Account) -> DomainResult<()> {
        let query = r#"
            UPDATE accounts
            SET name = ?, password_hash = ?, role = ?, email_verified = ?,
                account_non_locked = ?, failed_login_attempts = ?, locked_until = ?,
                auth_provider = ?, otp = ?, otp_generated_at = ?, otp_expiry = ?,
                reset_otp = ?, reset_otp_expiry = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&account.name)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.email_verified)
            .bind(account.account_non_locked)
            .bind(account.failed_login_attempts)
            .bind(account.locked_until)
            .bind(account.provider.as_str())
            .bind(&account.otp)
            .bind(account.otp_generated_at)
            .bind(account.otp_expiry)
            .bind(&account.reset_otp)
            .bind(account.reset_otp_expiry)
            .bind(account.updated_at)
            .bind(account.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update account: {}", e),
            })?;

        Ok(())
    }
}
