use thiserror::Error;

use shopcart_catalog::CatalogError;
use shopcart_core::Sku;

pub type CartResult<T> = Result<T, CartError>;

/// Cart-level failures.
///
/// Catalog failures raised while resolving a SKU pass through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("The item is already exist")]
    ItemAlreadyInCart { sku: Sku },

    #[error("Item with SKU {sku} not found in the cart")]
    ItemNotFoundInCart { sku: Sku },

    #[error("The cart is already empty")]
    CartAlreadyEmpty,

    #[error("The {code} is invalid")]
    InvalidDiscountCode { code: String },
}
