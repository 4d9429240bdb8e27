use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

pub type DbPool = PgPool;

/// Keeps trying to reach the database until it answers a probe query.
///
/// `max_attempts == 0` retries forever.
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match try_connect(config).await {
            Ok(pool) => {
                info!("Connected to database after {} attempt(s)", attempt);
                return Ok(pool);
            }
            Err(e) if config.max_attempts == 0 || attempt < config.max_attempts => {
                warn!(
                    "Database not available (attempt {}): {}; retrying in {}s",
                    attempt, e, config.retry_interval_secs
                );
                tokio::time::sleep(Duration::from_secs(config.retry_interval_secs)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn try_connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

/// Creates the payments table if it is not there yet.
pub async fn provision(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
