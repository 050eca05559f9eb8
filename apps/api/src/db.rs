use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Builds a PostgreSQL pool without opening a connection.
///
/// The first query establishes the connection; `connect_timeout` bounds how
/// long any request waits for one. Only a malformed URL fails here.
pub fn create_lazy_pool(
    database_url: &str,
    connect_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(connect_timeout)
        .connect_lazy(database_url)?;

    info!(
        "PostgreSQL pool configured (connects on first use, timeout {}s)",
        connect_timeout.as_secs()
    );
    Ok(pool)
}
