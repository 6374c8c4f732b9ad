//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per call, except batch inserts which share a transaction
//! - Unique and check constraints surface as `DbError::Constraint`
//! - Update and delete report rows affected instead of checking existence

pub mod users;
pub mod products;
pub mod orders;

pub use users::{User, UserRepo};
pub use products::{Product, ProductRepo};
pub use orders::{Order, OrderRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("store unavailable: {0}")]
    Unavailable(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        let constraint = match &e {
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_check_violation()
                    || db.is_foreign_key_violation() =>
            {
                Some(db.message().to_owned())
            }
            _ => None,
        };
        if let Some(message) = constraint {
            return Self::Constraint(message);
        }

        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(e)
            }
            e => Self::Sqlx(e),
        }
    }
}
