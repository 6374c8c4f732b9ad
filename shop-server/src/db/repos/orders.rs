//! Order repository
//!
//! `order_date` is always supplied by the caller's clock, never by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::OrderInput;

/// Order record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: String,
}

impl Order {
    /// Full shape for a stored order stamped at `order_date`.
    pub fn from_input(id: i64, order: OrderInput, order_date: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: order.user_id,
            product_id: order.product_id,
            order_date,
            status: order.status,
        }
    }
}

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        order: &OrderInput,
        order_date: DateTime<Utc>,
    ) -> Result<Order, DbError> {
        let order = sqlx::query_as(
            r#"
            INSERT INTO orders (user_id, product_id, order_date, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, product_id, order_date, status
            "#,
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order_date)
        .bind(&order.status)
        .fetch_one(self.pool)
        .await?;

        Ok(order)
    }

    /// Insert a batch of orders atomically, all stamped at `order_date`.
    pub async fn create_many(
        &self,
        orders: &[OrderInput],
        order_date: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        for order in orders {
            sqlx::query(
                "INSERT INTO orders (user_id, product_id, order_date, status) VALUES (?, ?, ?, ?)",
            )
            .bind(order.user_id)
            .bind(order.product_id)
            .bind(order_date)
            .bind(&order.status)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(orders.len() as u64)
    }

    pub async fn list(&self) -> Result<Vec<Order>, DbError> {
        let orders = sqlx::query_as(
            "SELECT id, user_id, product_id, order_date, status FROM orders ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(orders)
    }

    /// Overwrite all fields of order `id` and restamp it. Returns rows affected.
    pub async fn update(
        &self,
        id: i64,
        order: &OrderInput,
        order_date: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET user_id = ?, product_id = ?, order_date = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order_date)
        .bind(&order.status)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
