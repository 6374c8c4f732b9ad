//! Product repository

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::ProductInput;

/// Product record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Full shape for a stored product: input fields plus assigned id.
    pub fn from_input(id: i64, product: ProductInput) -> Self {
        Self {
            id,
            product_name: product.product_name,
            description: product.description,
            price: product.price,
        }
    }
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &ProductInput) -> Result<Product, DbError> {
        let product = sqlx::query_as(
            r#"
            INSERT INTO products (product_name, description, price)
            VALUES (?, ?, ?)
            RETURNING id, product_name, description, price
            "#,
        )
        .bind(&product.product_name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a batch of products atomically. Returns the number inserted.
    pub async fn create_many(&self, products: &[ProductInput]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        for product in products {
            sqlx::query("INSERT INTO products (product_name, description, price) VALUES (?, ?, ?)")
                .bind(&product.product_name)
                .bind(&product.description)
                .bind(product.price)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(products.len() as u64)
    }

    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as(
            "SELECT id, product_name, description, price FROM products ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(products)
    }

    /// Overwrite all fields of product `id`. Returns rows affected.
    pub async fn update(&self, id: i64, product: &ProductInput) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE products SET product_name = ?, description = ?, price = ? WHERE id = ?",
        )
        .bind(&product.product_name)
        .bind(&product.description)
        .bind(product.price)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete product `id`. Orders that reference it are left alone.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
