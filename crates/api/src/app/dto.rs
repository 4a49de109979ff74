use serde::{Deserialize, Serialize};

use shopcart_catalog::Item;
use shopcart_core::{ValidationResult, Validator};

/// Bounds for a cart line quantity, inclusive.
pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 1000;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items` and `PUT /items/{sku}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub sku: String,
    pub display_name: String,
    pub price: f64,
}

impl ItemRequest {
    pub fn into_item(self) -> ValidationResult<Item> {
        let item = Item::new(self.sku, self.display_name, self.price);
        item.validate()?;
        Ok(item)
    }
}

/// Body of `POST /carts/add` and `PUT /carts/update`.
#[derive(Debug, Deserialize)]
pub struct CartLineRequest {
    pub sku: String,
    // Signed so out-of-range values reach validation instead of failing to parse.
    pub quantity: i64,
}

impl CartLineRequest {
    pub fn validate(self) -> ValidationResult<(String, u32)> {
        Validator::new()
            .not_blank(&self.sku, "The SKU must not be blank")
            .min(self.quantity, MIN_QUANTITY, "The quantity must be positive")
            .max(
                self.quantity,
                MAX_QUANTITY,
                "The quantity must be equal or less than 1000",
            )
            .finish()?;
        // In range after validation, so the cast cannot truncate.
        Ok((self.sku, self.quantity as u32))
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartQuery {
    pub sku: String,
}

#[derive(Debug, Deserialize)]
pub struct TotalQuery {
    #[serde(rename = "discountCode")]
    pub discount_code: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn message(message: &'static str) -> MessageResponse {
    MessageResponse { message }
}
