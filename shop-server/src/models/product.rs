//! Product input shape

use serde::Deserialize;

use super::validation::{bounded_text, required_text, Validate, ValidationError};

/// Maximum length for product names
pub const MAX_PRODUCT_NAME_LEN: usize = 50;

/// Maximum length for product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Fields a caller supplies to create or update a product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub product_name: String,
    pub description: String,
    pub price: f64,
}

impl ProductInput {
    /// Deterministic demo product for index `i`, priced at `(i + 1) * 100`.
    pub fn synthetic(i: u32) -> Self {
        Self {
            product_name: format!("product{i}"),
            description: format!("description{i}"),
            price: f64::from(i + 1) * 100.0,
        }
    }
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_text("product_name", &self.product_name, MAX_PRODUCT_NAME_LEN)?;
        bounded_text("description", &self.description, MAX_DESCRIPTION_LEN)?;

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must be greater than 0",
            });
        }
        Ok(())
    }
}
