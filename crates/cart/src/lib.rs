//! Shopping cart domain module.
//!
//! A single process-wide cart of (SKU, quantity) lines. Every operation
//! resolves SKUs through the [`shopcart_catalog::ItemCatalog`] before it
//! touches cart state, and records successful mutations to a
//! [`shopcart_events::CartEventLog`].

pub mod cart;
pub mod discount;
pub mod error;

pub use cart::{CartLine, CartManager};
pub use discount::{DiscountPolicy, DiscountRateError};
pub use error::{CartError, CartResult};
