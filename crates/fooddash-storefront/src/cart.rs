//! # Cart Store
//!
//! Owns the session's mutable cart and wires every mutation to a re-render.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart Change           │
//! │  ─────────                ───────                 ───────────           │
//! │                                                                         │
//! │  Tap menu card ─────────► add_item() ───────────► line += 1 / append    │
//! │                           (+ success toast)                             │
//! │                                                                         │
//! │  Tap +/− stepper ───────► update_quantity() ────► qty += delta          │
//! │                                                   (≤0 removes line)     │
//! │                                                                         │
//! │  Tap remove ────────────► remove_item() ────────► line gone             │
//! │                                                                         │
//! │  Order placed ──────────► clear() ──────────────► empty cart            │
//! │                                                                         │
//! │  Every mutation ends with Renderer::render_cart(fresh CartView);        │
//! │  the pricing breakdown is recomputed each time, never cached.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart sits behind a `Mutex`: commands may arrive from a multithreaded
//! runtime, and only one may mutate at a time. Operations are short and all
//! mutate, so a plain `Mutex` beats a `RwLock` here.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info};

use crate::capability::{NoteKind, Notifier, Renderer};
use crate::catalog::MenuCatalog;
use fooddash_core::cart::{Cart, DeltaOutcome};
use fooddash_core::error::ValidationResult;
use fooddash_core::validation::validate_cart_non_empty;
use fooddash_core::{pricing, OrderItem, PricingBreakdown, PricingConfig};

// =============================================================================
// View Snapshots
// =============================================================================

/// One cart line resolved against the catalog, ready to display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

/// Immutable snapshot of the cart for a rendering layer.
///
/// `submit_enabled` carries the normal render rule: the submit action is
/// available iff the cart is non-empty. An in-flight submission overrides
/// this through `Renderer::set_submit_state`, not through the view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Total quantity across lines (the cart badge number).
    pub total_quantity: i64,
    pub breakdown: PricingBreakdown,
    pub submit_enabled: bool,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The session's cart, its pricing wiring, and its render/notify hooks.
///
/// Constructed at session start, discarded at session end; passed by
/// reference to whoever needs it - there is no ambient global cart.
pub struct CartStore {
    catalog: Arc<MenuCatalog>,
    cart: Mutex<Cart>,
    pricing: PricingConfig,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Creates an empty cart store over the session catalog.
    pub fn new(
        catalog: Arc<MenuCatalog>,
        pricing: PricingConfig,
        renderer: Arc<dyn Renderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        CartStore {
            catalog,
            cart: Mutex::new(Cart::new()),
            pricing,
            renderer,
            notifier,
        }
    }

    /// Adds one unit of a catalog product to the cart.
    ///
    /// ## Behavior
    /// - Unknown product id: silent no-op. The menu only ever offers catalog
    ///   ids, so an unknown id is a caller bug - debug-logged, not surfaced.
    /// - Already in cart: the line's quantity is incremented.
    /// - Otherwise: a new line is appended (display order = add order).
    ///
    /// Re-renders the cart and shows a success toast naming the product.
    pub fn add_item(&self, product_id: &str) {
        let Some(product) = self.catalog.find_by_id(product_id) else {
            debug!(product_id = %product_id, "add_item ignored: unknown product");
            return;
        };
        let name = product.name.clone();

        let quantity = self.with_cart_mut(|cart| cart.add(product_id));
        info!(product_id = %product_id, quantity = %quantity, "Item added to cart");

        self.render();
        self.notifier
            .show(NoteKind::Success, &format!("{} added to cart!", name));
    }

    /// Removes a line from the cart; no-op when the id has no line.
    ///
    /// Re-renders; deliberately no toast (the line vanishing is feedback
    /// enough).
    pub fn remove_item(&self, product_id: &str) {
        let removed = self.with_cart_mut(|cart| cart.remove(product_id));
        if removed {
            info!(product_id = %product_id, "Item removed from cart");
        } else {
            debug!(product_id = %product_id, "remove_item ignored: not in cart");
        }
        self.render();
    }

    /// Applies a signed quantity delta to a line.
    ///
    /// A delta that takes the quantity to 0 or below removes the line,
    /// exactly like [`CartStore::remove_item`]. Absent id: silent no-op, no
    /// re-render (nothing changed).
    pub fn update_quantity(&self, product_id: &str, delta: i64) {
        let outcome = self.with_cart_mut(|cart| cart.apply_delta(product_id, delta));
        match outcome {
            DeltaOutcome::Absent => {
                debug!(product_id = %product_id, "update_quantity ignored: not in cart");
                return;
            }
            DeltaOutcome::Updated(quantity) => {
                info!(product_id = %product_id, quantity = %quantity, "Quantity updated");
            }
            DeltaOutcome::Removed => {
                info!(product_id = %product_id, "Quantity reached zero; line removed");
            }
        }
        self.render();
    }

    /// Empties the cart and re-renders (runs after a successful order).
    pub fn clear(&self) {
        self.with_cart_mut(|cart| cart.clear());
        self.render();
    }

    /// Recomputes the pricing breakdown from current catalog prices.
    pub fn breakdown(&self) -> PricingBreakdown {
        self.with_cart(|cart| pricing::compute(cart, |id| self.catalog.price_of(id), &self.pricing))
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|cart| cart.is_empty())
    }

    /// Order precondition: the cart must have something in it.
    pub fn validate_non_empty(&self) -> ValidationResult<()> {
        self.with_cart(validate_cart_non_empty)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.with_cart(|cart| cart.total_quantity())
    }

    /// Builds the current view snapshot.
    pub fn view(&self) -> CartView {
        self.with_cart(|cart| {
            let lines = cart
                .lines()
                .iter()
                .map(|line| {
                    let product = self.catalog.find_by_id(&line.product_id);
                    let name = product
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| line.product_id.clone());
                    let image = product.map(|p| p.image.clone()).unwrap_or_default();
                    let unit_price_cents = product.map(|p| p.price_cents).unwrap_or(0);
                    CartLineView {
                        product_id: line.product_id.clone(),
                        name,
                        image,
                        unit_price_cents,
                        quantity: line.quantity,
                        line_total_cents: unit_price_cents * line.quantity,
                    }
                })
                .collect();

            CartView {
                lines,
                total_quantity: cart.total_quantity(),
                breakdown: pricing::compute(
                    cart,
                    |id| self.catalog.price_of(id),
                    &self.pricing,
                ),
                submit_enabled: !cart.is_empty(),
            }
        })
    }

    /// Snapshot of the cart as order lines (name, price, qty frozen now).
    ///
    /// Used by the submitter to build the order payload; later cart
    /// mutations do not touch the snapshot.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.with_cart(|cart| {
            cart.lines()
                .iter()
                .map(|line| {
                    let product = self.catalog.find_by_id(&line.product_id);
                    OrderItem {
                        name: product
                            .map(|p| p.name.clone())
                            .unwrap_or_else(|| line.product_id.clone()),
                        price_cents: product.map(|p| p.price_cents).unwrap_or(0),
                        qty: line.quantity,
                    }
                })
                .collect()
        })
    }

    /// Pushes a fresh view to the renderer.
    pub fn render(&self) {
        let view = self.view();
        self.renderer.render_cart(&view);
    }

    fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
