//! `shopcart-core`: shared building blocks for the catalog and cart domains.
//!
//! Pure domain primitives only (no IO, no HTTP, no locking).

pub mod error;
pub mod id;
pub mod validation;

pub use error::{ValidationError, ValidationResult};
pub use id::Sku;
pub use validation::Validator;
