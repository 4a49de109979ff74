use thiserror::Error;

use shopcart_core::Sku;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level failures. Messages are client-facing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Item with SKU {sku} is already added")]
    ItemAlreadyExists { sku: Sku },

    #[error("Item with SKU {sku} not found")]
    ItemNotFound { sku: Sku },

    /// An update tried to rename an entry; SKUs are never changed in place.
    #[error("Existing item's SKU {sku} does not match with the new SKU {new_sku}")]
    ItemSkuMismatch { sku: Sku, new_sku: Sku },
}

impl CatalogError {
    pub fn not_found(sku: impl Into<Sku>) -> Self {
        Self::ItemNotFound { sku: sku.into() }
    }

    pub fn already_exists(sku: impl Into<Sku>) -> Self {
        Self::ItemAlreadyExists { sku: sku.into() }
    }
}
