use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::StoreConfig;

/// Build the connection pool the store borrows from. Pool sizing, retries
/// and reconnection stay inside sqlx; callers just hand the pool around.
pub async fn connect(config: &StoreConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Apply the schema migrations shipped under `./migrations`.
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("run migrations")?;
    Ok(())
}
