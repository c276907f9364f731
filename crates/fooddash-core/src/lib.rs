//! # fooddash-core: Pure Business Logic for FoodDash
//!
//! This crate is the **heart** of the FoodDash storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FoodDash Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     UI Layer (web / terminal)                   │   │
//! │  │      Menu grid ──► Cart panel ──► Delivery form ──► History     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command interface                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  fooddash-storefront                            │   │
//! │  │    MenuCatalog, CartStore, OrderSubmitter, capabilities         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ fooddash-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Breakdown │  │   │
//! │  │   │   Order   │  │  TaxCalc  │  │ CartLine  │  │  compute  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO BACKEND • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, OrderPayload, OrderRecord, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart collection and its invariants
//! - [`pricing`] - Derived totals (subtotal, tax, delivery fee, total)
//! - [`error`] - Domain error types
//! - [`validation`] - Delivery-detail validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Backend, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fooddash_core::cart::Cart;
//! use fooddash_core::money::Money;
//! use fooddash_core::pricing::{self, PricingConfig};
//!
//! let mut cart = Cart::new();
//! cart.add("burger");
//! cart.add("burger");
//!
//! let price_of = |id: &str| (id == "burger").then(|| Money::from_cents(15000));
//! let breakdown = pricing::compute(&cart, price_of, &PricingConfig::default());
//!
//! // ₹150.00 × 2 = ₹300.00, + 5% tax + ₹40 delivery
//! assert_eq!(breakdown.total_cents, 30000 + 1500 + 4000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fooddash_core::Money` instead of
// `use fooddash_core::money::Money`

pub use cart::{Cart, CartLine, DeltaOutcome};
pub use error::ValidationError;
pub use money::Money;
pub use pricing::{PricingBreakdown, PricingConfig};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate applied to the cart subtotal, in basis points (500 = 5%).
pub const TAX_RATE_BPS: u32 = 500;

/// Flat delivery fee in minor currency units (₹40.00).
///
/// Charged whenever the cart is non-empty; an empty cart owes nothing,
/// including the delivery fee.
pub const DELIVERY_FEE_CENTS: i64 = 4000;
