//! # Pricing Module
//!
//! Derives the cart's billing figures: subtotal, tax, delivery fee, total.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Breakdown                                │
//! │                                                                         │
//! │  subtotal  = Σ price(line.product_id) × line.quantity                   │
//! │  tax       = subtotal × 5%        (rounded half-up to a minor unit)     │
//! │  delivery  = ₹40 flat             (₹0 when the cart is empty)           │
//! │  total     = subtotal + tax + delivery                                  │
//! │                                                                         │
//! │  Empty cart: every figure is zero. The delivery fee is NOT charged      │
//! │  on an empty cart.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `compute` is a pure function: no side effects, deterministic, and it never
//! mutates the cart. The breakdown is recomputed on every cart mutation and
//! never cached, so a stale figure can never be displayed or submitted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Pricing Config
// =============================================================================

/// Pricing parameters for a session.
///
/// Defaults to the storefront's flat 5% tax and ₹40 delivery fee; an app
/// binding may override them from its configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the subtotal.
    pub tax_rate: TaxRate,

    /// Flat delivery fee charged on any non-empty cart.
    pub delivery_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            tax_rate: TaxRate::from_bps(crate::TAX_RATE_BPS),
            delivery_fee: Money::from_cents(crate::DELIVERY_FEE_CENTS),
        }
    }
}

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// Derived billing figures for a cart.
///
/// Derived, never stored: recompute on every mutation instead of caching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingBreakdown {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl PricingBreakdown {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Returns the delivery fee as Money.
    #[inline]
    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Compute
// =============================================================================

/// Computes the pricing breakdown for a cart.
///
/// `price_of` resolves a product id to its current catalog price. A line
/// whose id no longer resolves contributes nothing to the subtotal; the
/// session layer guards catalog membership on add, so an unresolvable line
/// is a caller bug, not an error condition.
///
/// ## Example
/// ```rust
/// use fooddash_core::cart::Cart;
/// use fooddash_core::money::Money;
/// use fooddash_core::pricing::{compute, PricingConfig};
///
/// let mut cart = Cart::new();
/// cart.add("fries");
///
/// let price_of = |id: &str| (id == "fries").then(|| Money::from_cents(8000));
/// let breakdown = compute(&cart, price_of, &PricingConfig::default());
///
/// assert_eq!(breakdown.subtotal_cents, 8000);
/// assert_eq!(breakdown.tax_cents, 400);
/// assert_eq!(breakdown.delivery_fee_cents, 4000);
/// assert_eq!(breakdown.total_cents, 12400);
/// ```
pub fn compute<F>(cart: &Cart, price_of: F, config: &PricingConfig) -> PricingBreakdown
where
    F: Fn(&str) -> Option<Money>,
{
    let subtotal = cart
        .lines()
        .iter()
        .map(|line| {
            price_of(&line.product_id)
                .unwrap_or_else(Money::zero)
                .multiply_quantity(line.quantity)
        })
        .fold(Money::zero(), |acc, line_total| acc + line_total);

    let tax = subtotal.calculate_tax(config.tax_rate);

    // The delivery fee applies to orders, not to empty carts
    let delivery_fee = if cart.is_empty() {
        Money::zero()
    } else {
        config.delivery_fee
    };

    let total = subtotal + tax + delivery_fee;

    PricingBreakdown {
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        delivery_fee_cents: delivery_fee.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price_table(id: &str) -> Option<Money> {
        match id {
            "burger" => Some(Money::from_cents(15000)), // ₹150.00
            "fries" => Some(Money::from_cents(8000)),   // ₹80.00
            _ => None,
        }
    }

    #[test]
    fn test_breakdown_burger_and_fries() {
        // Burger ₹150 × 2 + Fries ₹80 × 1
        let mut cart = Cart::new();
        cart.add("burger");
        cart.add("burger");
        cart.add("fries");

        let breakdown = compute(&cart, price_table, &PricingConfig::default());

        assert_eq!(breakdown.subtotal_cents, 38000); // ₹380.00
        assert_eq!(breakdown.tax_cents, 1900); // ₹19.00
        assert_eq!(breakdown.delivery_fee_cents, 4000); // ₹40.00
        assert_eq!(breakdown.total_cents, 43900); // ₹439.00
    }

    #[test]
    fn test_empty_cart_is_all_zeros() {
        let cart = Cart::new();
        let breakdown = compute(&cart, price_table, &PricingConfig::default());

        // Including the delivery fee: an empty cart owes nothing
        assert_eq!(breakdown, PricingBreakdown::default());
    }

    #[test]
    fn test_delivery_fee_iff_non_empty() {
        let mut cart = Cart::new();
        cart.add("fries");

        let breakdown = compute(&cart, price_table, &PricingConfig::default());
        assert_eq!(breakdown.delivery_fee_cents, 4000);

        cart.remove("fries");
        let breakdown = compute(&cart, price_table, &PricingConfig::default());
        assert_eq!(breakdown.delivery_fee_cents, 0);
    }

    #[test]
    fn test_unresolvable_line_prices_at_zero() {
        let mut cart = Cart::new();
        cart.add("ghost");
        cart.add("fries");

        let breakdown = compute(&cart, price_table, &PricingConfig::default());
        assert_eq!(breakdown.subtotal_cents, 8000);
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let mut cart = Cart::new();
        cart.add("burger");
        cart.add("fries");
        cart.apply_delta("fries", 4);

        let breakdown = compute(&cart, price_table, &PricingConfig::default());
        assert_eq!(
            breakdown.total_cents,
            breakdown.subtotal_cents + breakdown.tax_cents + breakdown.delivery_fee_cents
        );
    }

    #[test]
    fn test_custom_config() {
        let mut cart = Cart::new();
        cart.add("fries");

        let config = PricingConfig {
            tax_rate: TaxRate::zero(),
            delivery_fee: Money::zero(),
        };
        let breakdown = compute(&cart, price_table, &config);

        assert_eq!(breakdown.total_cents, 8000);
    }
}
