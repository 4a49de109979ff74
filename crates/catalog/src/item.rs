use serde::{Deserialize, Serialize};

use shopcart_core::{Sku, ValidationResult, Validator};

/// A sellable catalog item.
///
/// Immutable once built: updates replace the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    sku: Sku,
    display_name: String,
    price: f64,
}

impl Item {
    pub fn new(sku: impl Into<Sku>, display_name: impl Into<String>, price: f64) -> Self {
        Self {
            sku: sku.into(),
            display_name: display_name.into(),
            price,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Price of `quantity` units of this item.
    pub fn line_total(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity)
    }

    /// Field constraints: non-blank sku and name, strictly positive price.
    pub fn validate(&self) -> ValidationResult<()> {
        Validator::new()
            .not_blank(self.sku.as_str(), "The sku must not be blank")
            .not_blank(&self.display_name, "The displayName must not be blank")
            .positive(self.price, "The price must be positive")
            .finish()
    }
}
