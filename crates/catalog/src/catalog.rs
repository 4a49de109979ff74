use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopcart_core::Sku;

use crate::error::{CatalogError, CatalogResult};
use crate::item::Item;

/// In-memory item catalog keyed by SKU.
///
/// One lock guards the whole map and is held across each check-then-act
/// sequence, so concurrent writers see linearizable add/update/delete.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: RwLock<HashMap<Sku, Item>>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new item; its SKU must not be known yet.
    pub fn add_item(&self, item: Item) -> CatalogResult<()> {
        let mut items = self.write();
        if items.contains_key(item.sku()) {
            return Err(CatalogError::already_exists(item.sku().clone()));
        }
        tracing::debug!(sku = %item.sku(), "catalog item added");
        items.insert(item.sku().clone(), item);
        Ok(())
    }

    /// Resolve an item by SKU.
    pub fn get_item(&self, sku: &str) -> CatalogResult<Item> {
        lookup(&self.read(), sku).cloned()
    }

    /// Resolve several SKUs against one consistent snapshot of the catalog.
    ///
    /// Fails on the first unknown SKU; no partial result is returned.
    pub fn get_items<'a, I>(&self, skus: I) -> CatalogResult<Vec<Item>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let items = self.read();
        skus.into_iter()
            .map(|sku| lookup(&items, sku).cloned())
            .collect()
    }

    /// Replace the entry at `sku` with `new_item` in full.
    ///
    /// `new_item` must carry the same SKU; renaming is delete + add.
    pub fn update_item(&self, sku: &str, new_item: Item) -> CatalogResult<()> {
        let mut items = self.write();
        let existing = lookup(&items, sku)?;
        if existing.sku() != new_item.sku() {
            return Err(CatalogError::ItemSkuMismatch {
                sku: existing.sku().clone(),
                new_sku: new_item.sku().clone(),
            });
        }
        tracing::debug!(sku = %sku, "catalog item updated");
        items.insert(new_item.sku().clone(), new_item);
        Ok(())
    }

    pub fn delete_item(&self, sku: &str) -> CatalogResult<()> {
        let mut items = self.write();
        lookup(&items, sku)?;
        items.remove(sku);
        tracing::debug!(sku = %sku, "catalog item deleted");
        Ok(())
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.read().contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Sku, Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Sku, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The single existence check every catalog operation goes through.
fn lookup<'a>(items: &'a HashMap<Sku, Item>, sku: &str) -> CatalogResult<&'a Item> {
    items.get(sku).ok_or_else(|| CatalogError::not_found(sku))
}
