//! Route handlers organized by resource

use serde::{Deserialize, Serialize};

pub mod health;
pub mod users;
pub mod products;
pub mod orders;
pub mod seed;

/// Plain confirmation body for deletes and seeding
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
