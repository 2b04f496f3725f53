//! Database migration commands

use anyhow::Result;
use sqlx::{Sqlite, migrate::MigrateDatabase};

use coursehub::Config;

/// Create the database if needed and apply every pending migration
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = coursehub::db::create_pool(&config.database.url, 1).await?;
    coursehub::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: &Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
