//! MySQL implementation of the PendingRegistrationRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use authify_core::domain::entities::pending_registration::PendingRegistration;
use authify_core::errors::{DomainError, DomainResult};
use authify_core::repositories::PendingRegistrationRepository;

/// MySQL implementation of PendingRegistrationRepository
pub struct MySqlPendingRegistrationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPendingRegistrationRepository {
    /// Create a new MySQL pending registration repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a PendingRegistration entity
    fn row_to_pending(row: &sqlx::mysql::MySqlRow) -> Result<PendingRegistration, DomainError> {
        Ok(PendingRegistration {
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
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
        })
    }
}

#[async_trait]
impl PendingRegistrationRepository for MySqlPendingRegistrationRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<PendingRegistration>> {
        let query = r#"
            SELECT email, name, password_hash, otp, otp_generated_at, otp_expiry
            FROM pending_registrations
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find pending registration: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_pending(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, registration: PendingRegistration) -> DomainResult<()> {
        let query = r#"
            INSERT INTO pending_registrations (
                email, name, password_hash, otp, otp_generated_at, otp_expiry
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                password_hash = VALUES(password_hash),
                otp = VALUES(otp),
                otp_generated_at = VALUES(otp_generated_at),
                otp_expiry = VALUES(otp_expiry)
        "#;

        sqlx::query(query)
            .bind(&registration.email)
            .bind(&registration.name)
            .bind(&registration.password_hash)
            .bind(&registration.otp)
            .bind(registration.otp_generated_at)
            .bind(registration.otp_expiry)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to upsert pending registration: {}", e),
            })?;

        Ok(())
    }

    async fn delete(&self, email: &str) -> DomainResult<bool> {
        let query = "DELETE FROM pending_registrations WHERE email = ?";

        let result = sqlx::query(query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete pending registration: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
