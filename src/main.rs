use anyhow::Context;
use dotenv::dotenv;
use payments_api::{
    config::{AppConfig, StorageBackend},
    database::{
        connection::{connect_with_retry, provision},
        memory::InMemoryPaymentStore,
        postgres::PgPaymentStore,
        store::PaymentStore,
    },
    server,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let store: Arc<dyn PaymentStore> = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = connect_with_retry(&config.database)
                .await
                .context("failed to connect to database")?;
            provision(&pool)
                .await
                .context("failed to provision database")?;
            Arc::new(PgPaymentStore::new(pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory payment store");
            Arc::new(InMemoryPaymentStore::new())
        }
    };

    server::run(&config, store)
        .await
        .context("HTTP server failed")
}
