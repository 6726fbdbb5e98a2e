use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Connects to the SQLite database at [db_url] and brings its schema up to date.
///
/// In-memory databases only live as long as the connection that created them, so for those the
/// pool is pinned to a single connection that is never recycled. If that connection is ever closed
/// anyway (for example when a query future is dropped halfway through), the pool reconnects to a
/// brand new, empty database without a schema and every later query fails. Point [db_url] at a file
/// when the data has to outlive such a reconnect.
pub async fn connect_sqlx(db_url: &str) -> Result<SqlitePool, anyhow::Error> {
    let connect_options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("parsing database URL {db_url}"))?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new();
    if is_in_memory(db_url) {
        pool_options = pool_options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(connect_options)
        .await
        .context("connecting to the database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("running database migrations")?;

    Ok(pool)
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}
