use std::sync::Arc;

use shopcart_cart::{CartManager, DiscountPolicy};
use shopcart_catalog::ItemCatalog;
use shopcart_events::{CartEventLog, TracingCartEventLog};

use crate::config::ApiConfig;

/// Process-wide domain state shared by all handlers.
///
/// The cart is a single global instance; there is no per-user session.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<ItemCatalog>,
    cart: Arc<CartManager>,
}

impl AppServices {
    pub fn new(discounts: DiscountPolicy, events: Arc<dyn CartEventLog>) -> Self {
        let catalog = Arc::new(ItemCatalog::new());
        let cart = Arc::new(CartManager::with_discounts(
            catalog.clone(),
            events,
            discounts,
        ));
        Self { catalog, cart }
    }

    /// Empty catalog and cart, standard discounts, events logged via tracing.
    pub fn in_memory() -> Self {
        Self::new(DiscountPolicy::standard(), Arc::new(TracingCartEventLog::new()))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.discounts.clone(), Arc::new(TracingCartEventLog::new()))
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }
}
