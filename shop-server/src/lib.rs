//! shop-server: CRUD backend for users, products, and orders
//!
//! Exposes the three record types over HTTP with JSON bodies and persists
//! them in a single SQLite database created on first start.

pub mod db;
pub mod http;
pub mod models;
pub mod password;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, ServerConfig};
