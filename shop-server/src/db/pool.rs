//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The database file
//! and its parent directory are created on first start.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::{schema, DbError};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Fail fast instead of queueing forever when the pool is exhausted.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default store location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/database.db";

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://data/database.db`
///
/// # Errors
///
/// Returns an error if the URL is invalid or the database cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    ensure_parent_dir(options.get_filename()).await;

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

/// Open the store: connect and make sure all tables exist.
///
/// # Example
///
/// ```ignore
/// let pool = open("sqlite://data/database.db").await?;
/// ```
pub async fn open(database_url: &str) -> Result<SqlitePool, DbError> {
    let pool = create_pool(database_url).await?;
    schema::apply(&pool).await?;
    tracing::info!(url = %database_url, "Database ready");
    Ok(pool)
}

/// Private in-memory store with the schema applied.
///
/// Each SQLite `:memory:` connection is its own database, so the pool holds
/// exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::apply(&pool).await?;
    Ok(pool)
}

async fn ensure_parent_dir(path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    if parent.as_os_str().is_empty() {
        return;
    }
    if let Err(e) = tokio::fs::create_dir_all(parent).await {
        tracing::warn!(path = %parent.display(), error = %e, "Failed to create database directory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn open_creates_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shop.db");
        let url = format!("sqlite://{}", path.display());

        let pool = open(&url).await.expect("open failed");
        assert!(path.exists());

        // Reopening an existing store keeps its tables
        pool.close().await;
        let pool = open(&url).await.expect("reopen failed");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn concurrent_pool_access() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("shop.db").display());
        let pool = open(&url).await.expect("open failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT ?")
                        .bind(i as i64)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }
}
