//! # Menu Catalog
//!
//! The session's product list, loaded once from the hosted backend.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Lifecycle                                   │
//! │                                                                         │
//! │  Storefront::open                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataStore::list_available_products()      (one call, not retried)      │
//! │       │                                                                 │
//! │       ├── Ok(products) ──► catalog holds them, immutable for the        │
//! │       │                    session (backend order = display order)      │
//! │       │                                                                 │
//! │       └── Err(e) ───────► error logged, catalog stays EMPTY:            │
//! │                           the menu renders empty instead of crashing    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{error, info};

use crate::capability::DataStore;
use fooddash_core::{Money, Product};

/// Immutable-per-session product catalog.
///
/// The cart references products by id; every lookup comes back here.
#[derive(Debug, Default)]
pub struct MenuCatalog {
    products: Vec<Product>,
}

impl MenuCatalog {
    /// Creates an empty catalog (also the degraded state after a failed load).
    pub fn empty() -> Self {
        MenuCatalog {
            products: Vec::new(),
        }
    }

    /// Loads the available products from the backend.
    ///
    /// On failure the catalog is empty: browsing degrades gracefully and the
    /// rest of the session keeps working. The load is not retried
    /// automatically; a reload means a new session.
    pub async fn load(store: &dyn DataStore) -> Self {
        match store.list_available_products().await {
            Ok(products) => {
                info!(count = products.len(), "Catalog loaded");
                MenuCatalog { products }
            }
            Err(e) => {
                error!(error = %e, "Failed to load products; menu will render empty");
                MenuCatalog::empty()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_products(products: Vec<Product>) -> Self {
        MenuCatalog { products }
    }

    /// Looks up a product by id. Absence is a value, never a panic.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Convenience price lookup for the pricing engine.
    pub fn price_of(&self, id: &str) -> Option<Money> {
        self.find_by_id(id).map(Product::price)
    }

    /// All products in display order (backend creation-time ascending).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products on the menu.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_products, MemStore};

    #[tokio::test]
    async fn test_load_holds_backend_order() {
        let store = MemStore::with_products(sample_products());
        let catalog = MenuCatalog::load(&store).await;

        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["burger", "fries", "cola"]);
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty() {
        let store = MemStore::with_products(sample_products());
        store.fail_product_list();

        let catalog = MenuCatalog::load(&store).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemStore::with_products(sample_products());
        let catalog = MenuCatalog::load(&store).await;

        assert_eq!(catalog.find_by_id("fries").map(|p| p.price_cents), Some(8000));
        assert!(catalog.find_by_id("ghost").is_none());
        assert_eq!(catalog.price_of("burger"), Some(Money::from_cents(15000)));
        assert_eq!(catalog.price_of("ghost"), None);
    }
}
