//! Input shapes with validation at the boundary
//!
//! Every request body is checked here before it reaches the database.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod product;
pub mod order;

pub use validation::{Validate, ValidationError};
pub use user::{NewUser, UserInput};
pub use product::ProductInput;
pub use order::OrderInput;
