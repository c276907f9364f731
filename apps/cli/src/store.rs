//! # In-Memory Data Store
//!
//! Demo `DataStore` binding: a seeded menu and an in-memory order log. The
//! production binding talks to the hosted database; this one keeps the same
//! contract (ordering included) so the session layer cannot tell them apart.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use fooddash_core::{OrderPayload, OrderRecord, Product};
use fooddash_storefront::{DataStore, StoreError};

/// Seeded, in-memory backend.
pub struct MemoryStore {
    products: Vec<Product>,
    orders: Mutex<Vec<OrderRecord>>,
}

impl MemoryStore {
    /// A store with the demo menu (creation order = display order).
    pub fn seeded() -> Self {
        let menu = [
            ("Classic Burger", 15000, "4.6 ★ (210)", "burger.jpg"),
            ("Masala Fries", 8000, "4.4 ★ (98)", "fries.jpg"),
            ("Margherita Pizza", 25000, "4.7 ★ (156)", "pizza.jpg"),
            ("Paneer Wrap", 12000, "4.3 ★ (77)", "wrap.jpg"),
            ("Cold Coffee", 9000, "4.5 ★ (64)", "coffee.jpg"),
            ("Gulab Jamun", 6000, "4.8 ★ (131)", "jamun.jpg"),
        ];

        let products = menu
            .into_iter()
            .map(|(name, price_cents, rating, image)| Product {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                price_cents,
                rating: rating.to_string(),
                image: format!("https://img.fooddash.example/{}", image),
            })
            .collect();

        MemoryStore {
            products,
            orders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list_available_products(&self) -> Result<Vec<Product>, StoreError> {
        debug!(count = self.products.len(), "list_available_products");
        Ok(self.products.clone())
    }

    async fn insert_order(&self, order: &OrderPayload) -> Result<(), StoreError> {
        let record = OrderRecord {
            id: Uuid::new_v4().to_string(),
            customer_name: order.customer_name.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            items: order.items.clone(),
            total_amount_cents: order.total_amount_cents,
            created_at: Utc::now(),
        };
        debug!(order_id = %record.id, total = record.total_amount_cents, "insert_order");
        self.orders
            .lock()
            .map_err(|_| StoreError::unavailable("order log poisoned"))?
            .push(record);
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        // Newest first, matching the hosted backend's ordering
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| StoreError::unavailable("order log poisoned"))?
            .clone();
        orders.reverse();
        Ok(orders)
    }
}
