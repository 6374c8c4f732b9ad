//! Table definitions for users, products, and orders
//!
//! Applied on every startup; each statement is idempotent.
//! `orders.user_id` and `orders.product_id` are plain integers with no
//! foreign-key constraint, so orders may outlive the rows they point at.

use sqlx::SqlitePool;

use super::DbError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        surname TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_name TEXT NOT NULL,
        description TEXT NOT NULL,
        price REAL NOT NULL CHECK (price > 0)
    )
"#;

const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        product_id INTEGER NOT NULL,
        order_date TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'new'
    )
"#;

/// Create all tables if they do not exist yet.
pub async fn apply(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::debug!("Applying schema");

    for statement in [CREATE_USERS, CREATE_PRODUCTS, CREATE_ORDERS] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
