//! # Cart Module
//!
//! The customer's in-progress selection of products and quantities.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Invariants                                   │
//! │                                                                         │
//! │  1. At most one line per product id                                     │
//! │     add("burger") twice  →  one line, quantity 2                        │
//! │                                                                         │
//! │  2. Every stored quantity is ≥ 1                                        │
//! │     a delta that takes a line to 0 or below REMOVES the line;           │
//! │     a zero/negative quantity is never stored                            │
//! │                                                                         │
//! │  3. Insertion order is display order                                    │
//! │     incrementing an existing line never moves it                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart holds product *references* (ids), not product data. Prices and
//! names are resolved against the session catalog when totals or views are
//! computed, and frozen into an [`crate::types::OrderPayload`] only at
//! submission time. The cart is never persisted; it lives and dies with the
//! session.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: a product reference and a strictly positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the referenced catalog product.
    pub product_id: String,

    /// Quantity in cart. Always ≥ 1.
    pub quantity: i64,
}

// =============================================================================
// Delta Outcome
// =============================================================================

/// Result of applying a quantity delta to a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaOutcome {
    /// No line for that product id; the cart is unchanged.
    Absent,
    /// The line now holds the given quantity.
    Updated(i64),
    /// The delta took the quantity to 0 or below; the line was removed.
    Removed,
}

// =============================================================================
// Cart
// =============================================================================

/// Insertion-ordered collection of cart lines.
///
/// All operations preserve the invariants above unconditionally; callers
/// cannot construct a cart with duplicate ids or non-positive quantities
/// through this API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended at the end, so the
    /// display order is the order items were first added in.
    ///
    /// Returns the line's quantity after the add.
    pub fn add(&mut self, product_id: &str) -> i64 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity: 1,
        });
        1
    }

    /// Removes the line for a product id.
    ///
    /// Returns `true` if a line was removed, `false` if none existed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Applies a signed quantity delta to a line.
    ///
    /// ## Behavior
    /// - No line for the id: [`DeltaOutcome::Absent`], cart unchanged.
    /// - `old + delta ≤ 0`: the line is removed (equivalent to [`Cart::remove`]).
    /// - Otherwise the new quantity is stored.
    pub fn apply_delta(&mut self, product_id: &str, delta: i64) -> DeltaOutcome {
        let Some(index) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return DeltaOutcome::Absent;
        };

        let new_quantity = self.lines[index].quantity + delta;
        if new_quantity <= 0 {
            self.lines.remove(index);
            return DeltaOutcome::Removed;
        }

        self.lines[index].quantity = new_quantity;
        DeltaOutcome::Updated(new_quantity)
    }

    /// Empties the cart (used after a successful order).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Returns the quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, product_id: &str) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
