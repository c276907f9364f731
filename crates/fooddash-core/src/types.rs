//! # Domain Types
//!
//! Core domain types used throughout FoodDash.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  OrderPayload   │   │   OrderRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  customer_name  │   │  id             │       │
//! │  │  name           │   │  phone          │   │  (payload...)   │       │
//! │  │  price_cents    │   │  address        │   │  created_at     │       │
//! │  │  rating         │   │  items          │   └─────────────────┘       │
//! │  │  image          │   │  total_amount   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │ DeliveryDetails │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  name           │                             │
//! │  │  500 = 5%       │   │  phone, address │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An `OrderPayload` freezes item names, prices, and quantities at submission
//! time. Once built, it is independent of any later cart mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the storefront's GST-style flat rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::TAX_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A menu item available for ordering.
///
/// Loaded once per session by the catalog and immutable afterwards. The cart
/// references products by `id` only; prices are looked up in the catalog at
/// computation time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the backend.
    pub id: String,

    /// Display name shown on the menu card and in the cart.
    pub name: String,

    /// Price in minor currency units. Never negative.
    pub price_cents: i64,

    /// Display-only rating string, e.g. "4.5 ★ (120)".
    pub rating: String,

    /// Image URL for the menu card.
    pub image: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Delivery Details
// =============================================================================

/// Delivery details entered by the customer before placing an order.
///
/// Raw form input; [`crate::validation::validate_delivery_details`] trims and
/// checks the fields before an order is built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

// =============================================================================
// Order Payload
// =============================================================================

/// A line of a submitted order.
/// Uses snapshot pattern to freeze product data at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Product name at submission time (frozen).
    pub name: String,
    /// Unit price in minor units at submission time (frozen).
    pub price_cents: i64,
    /// Quantity ordered.
    pub qty: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.qty)
    }
}

/// The order handed to `DataStore::insert_order`.
///
/// Built at submission time from the cart, the catalog, and validated
/// delivery details. `total_amount_cents` is the pricing breakdown's grand
/// total - subtotal + tax + delivery fee - and is exact to two decimal
/// places by construction (integer minor units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderPayload {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total_amount_cents: i64,
}

impl OrderPayload {
    /// Returns the submitted grand total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// A past order as returned by `DataStore::list_orders`.
///
/// The backend owns these rows; `items` is preserved exactly as stored at
/// submission time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRecord {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total_amount_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Returns the stored grand total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(5.0);
        assert_eq!(rate.bps(), 500);
    }

    #[test]
    fn test_tax_rate_default_is_storefront_rate() {
        assert_eq!(TaxRate::default().bps(), crate::TAX_RATE_BPS);
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            name: "Burger".to_string(),
            price_cents: 15000,
            qty: 2,
        };
        assert_eq!(item.line_total().cents(), 30000);
    }
}
