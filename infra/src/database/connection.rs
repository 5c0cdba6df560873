//! MySQL connection pool setup

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use se_core::errors::DomainError;
use se_shared::config::database::DatabaseConfig;

/// Builds the shared connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to connect to database: {e}")))?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool created"
    );
    Ok(pool)
}
