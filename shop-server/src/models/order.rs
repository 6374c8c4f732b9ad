//! Order input shape

use serde::Deserialize;

use super::validation::{required_text, Validate, ValidationError};

/// Maximum length for order status
pub const MAX_STATUS_LEN: usize = 50;

/// Status given to generated orders
pub const DEFAULT_STATUS: &str = "new";

/// Fields a caller supplies to create or update an order
///
/// `order_date` is accepted for compatibility but never stored; the server
/// stamps orders with its own clock on create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInput {
    pub user_id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub order_date: Option<String>,
    pub status: String,
}

impl OrderInput {
    /// Demo order for index `i`, pointing at user and product `i + 1`.
    pub fn synthetic(i: u32) -> Self {
        Self {
            user_id: i64::from(i) + 1,
            product_id: i64::from(i) + 1,
            order_date: None,
            status: DEFAULT_STATUS.to_owned(),
        }
    }
}

impl Validate for OrderInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_text("status", &self.status, MAX_STATUS_LEN)
    }
}
