use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use std::time::Duration;

/// Connection options applied to every pooled connection
///
/// - WAL mode lets readers proceed while a signup is writing
/// - busy_timeout makes concurrent writers wait instead of failing with SQLITE_BUSY
/// - synchronous=NORMAL is safe with WAL
/// - foreign_keys must be explicitly enabled (disabled by default)
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("temp_store", "memory"))
}

/// Create a pool shared by the HTTP handlers and the CLI commands
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Apply every pending schema migration
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    coursehub_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}
