use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use shopcart_catalog::{Item, ItemCatalog};
use shopcart_core::Sku;
use shopcart_events::{CartEvent, CartEventLog};

use crate::discount::DiscountPolicy;
use crate::error::{CartError, CartResult};

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

/// The process-wide shopping cart.
///
/// Holds SKU → quantity. Quantities are assumed to be in range already;
/// bounds are enforced by the request layer, not here.
///
/// Locking: the cart map has its own lock, held for the whole of each
/// operation. When catalog lookups happen under it the order is always
/// cart then catalog, and the catalog never takes the cart lock.
pub struct CartManager {
    catalog: Arc<ItemCatalog>,
    events: Arc<dyn CartEventLog>,
    discounts: DiscountPolicy,
    lines: Mutex<BTreeMap<Sku, u32>>,
}

impl core::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartManager")
            .field("lines", &*self.lock())
            .field("discounts", &self.discounts)
            .finish_non_exhaustive()
    }
}

impl CartManager {
    /// Cart backed by `catalog` with the standard discount table.
    pub fn new(catalog: Arc<ItemCatalog>, events: Arc<dyn CartEventLog>) -> Self {
        Self::with_discounts(catalog, events, DiscountPolicy::standard())
    }

    pub fn with_discounts(
        catalog: Arc<ItemCatalog>,
        events: Arc<dyn CartEventLog>,
        discounts: DiscountPolicy,
    ) -> Self {
        Self {
            catalog,
            events,
            discounts,
            lines: Mutex::new(BTreeMap::new()),
        }
    }

    /// Add a new line. Adding a SKU that is already in the cart is always
    /// rejected, whatever the quantity.
    pub fn add_item_to_cart(&self, sku: &str, quantity: u32) -> CartResult<()> {
        let mut lines = self.lock();
        let item = self.catalog.get_item(sku)?;

        if lines.contains_key(sku) {
            return Err(CartError::ItemAlreadyInCart {
                sku: item.sku().clone(),
            });
        }

        lines.insert(item.sku().clone(), quantity);
        self.events.record(CartEvent::added(sku, quantity));
        Ok(())
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// A known catalog SKU with no cart line is a silent no-op: nothing is
    /// set and no event is recorded.
    pub fn update_item_quantity(&self, sku: &str, quantity: u32) -> CartResult<()> {
        let mut lines = self.lock();
        self.catalog.get_item(sku)?;

        match lines.get_mut(sku) {
            Some(current) => {
                *current = quantity;
                self.events.record(CartEvent::quantity_updated(sku, quantity));
            }
            None => {
                tracing::debug!(sku = %sku, "quantity update for sku not in cart ignored");
            }
        }
        Ok(())
    }

    /// Remove a line.
    ///
    /// The SKU must still resolve in the catalog, so a line whose item was
    /// deleted from the catalog cannot be removed individually (only by
    /// emptying the cart).
    pub fn remove_item_from_cart(&self, sku: &str) -> CartResult<()> {
        let mut lines = self.lock();
        self.catalog.get_item(sku)?;

        if lines.remove(sku).is_none() {
            return Err(CartError::ItemNotFoundInCart {
                sku: Sku::from(sku),
            });
        }
        self.events.record(CartEvent::removed(sku));
        Ok(())
    }

    pub fn empty_cart(&self) -> CartResult<()> {
        let mut lines = self.lock();
        if lines.is_empty() {
            return Err(CartError::CartAlreadyEmpty);
        }
        lines.clear();
        self.events.record(CartEvent::emptied());
        Ok(())
    }

    /// Every line resolved against the catalog, ordered by SKU.
    ///
    /// Fails as a whole if any SKU no longer resolves.
    pub fn get_cart_items(&self) -> CartResult<Vec<CartLine>> {
        let lines = self.lock();
        let items = self.catalog.get_items(lines.keys().map(Sku::as_str))?;

        Ok(items
            .into_iter()
            .zip(lines.values().copied())
            .map(|(item, quantity)| CartLine { item, quantity })
            .collect())
    }

    /// Sum of `price * quantity` over all lines, with an optional
    /// whole-cart discount applied afterwards.
    pub fn calculate_total(&self, discount_code: Option<&str>) -> CartResult<f64> {
        let total = {
            let lines = self.lock();
            let items = self.catalog.get_items(lines.keys().map(Sku::as_str))?;
            items
                .iter()
                .zip(lines.values().copied())
                .map(|(item, quantity)| item.line_total(quantity))
                .sum::<f64>()
        };

        self.discounts.apply(total, discount_code)
    }

    /// Raw quantity for `sku`, without consulting the catalog.
    pub fn quantity_of(&self, sku: &str) -> Option<u32> {
        self.lock().get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Sku, u32>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
