//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool and the repository implementations for the
//! account and pending-registration stores. Schema migrations live under
//! `infra/migrations/`.

pub mod mysql;

pub use mysql::{MySqlAccountRepository, MySqlPendingRegistrationRepository};

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use tracing::log::LevelFilter;

use authify_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration settings
///
/// # Returns
/// * `Result<MySqlPool, InfrastructureError>` - Connection pool or error
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    tracing::info!(
        "Creating database connection pool with max_connections: {}",
        config.max_connections
    );

    // Parse connection options from URL
    let connect_options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(600))
        .connect_with(connect_options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
