//! Item catalog domain module.
//!
//! Owns the set of known items keyed by SKU and enforces uniqueness and
//! existence. Every read or write elsewhere in the system resolves items
//! through [`ItemCatalog::get_item`].

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::ItemCatalog;
pub use error::{CatalogError, CatalogResult};
pub use item::Item;
