// src/store.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::product::Product;

// In-memory catalog. All writes go through the lock; reads clone out a
// snapshot so handlers never hold it across an await.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Catalog>>,
}

struct Catalog {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Catalog {
                products: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    // Assigns the next id, ignoring whatever id the caller put on the record.
    pub fn create(&self, mut product: Product) -> Product {
        let mut catalog = self.inner.write();
        product.id = catalog.next_id;
        catalog.next_id += 1;
        catalog.products.insert(product.id, product.clone());
        product
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.inner.read().products.get(&id).cloned()
    }

    // Overwrites every mutable field; `id` and `date_added` stay as stored.
    pub fn update(&self, id: i64, data: Product) -> Option<Product> {
        let mut catalog = self.inner.write();
        let existing = catalog.products.get_mut(&id)?;
        let updated = Product {
            id: existing.id,
            date_added: existing.date_added,
            ..data
        };
        *existing = updated.clone();
        Some(updated)
    }

    pub fn delete(&self, id: i64) -> bool {
        self.inner.write().products.remove(&id).is_some()
    }

    pub fn categories(&self) -> Vec<String> {
        let catalog = self.inner.read();
        let mut categories: Vec<String> = catalog
            .products
            .values()
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    // Snapshot in id order, which the query engine relies on for its
    // default ordering.
    pub fn products(&self) -> Vec<Product> {
        self.inner.read().products.values().cloned().collect()
    }

    pub fn seed(&self, products: Vec<Product>) {
        let mut catalog = self.inner.write();
        for product in products {
            catalog.next_id = catalog.next_id.max(product.id + 1);
            catalog.products.insert(product.id, product);
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
