//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One pool opened at startup and passed to handlers through state
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Single statement per request; transactions only for batch seeding

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, open};
pub use repos::*;
