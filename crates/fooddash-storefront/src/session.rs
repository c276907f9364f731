//! # Storefront Session
//!
//! The command interface a UI layer binds to, plus the startup sequence.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. AuthProvider::check_session ─────────────────────────────────────►  │
//! │     • nobody signed in (or check failed) → SessionGate::RequiresLogin   │
//! │     • admin role                         → SessionGate::Admin           │
//! │       (the admin console - and its credentials - live with the          │
//! │        external auth collaborator, never here)                          │
//! │                                                                         │
//! │  2. MenuCatalog::load ───────────────────────────────────────────────►  │
//! │     • one backend call; failure degrades to an empty menu               │
//! │                                                                         │
//! │  3. Initial paint ───────────────────────────────────────────────────►  │
//! │     • render_menu + render_cart (empty, submit disabled)                │
//! │                                                                         │
//! │  4. SessionGate::Customer(Storefront) ───────────────────────────────►  │
//! │     • commands: add_item / remove_item / update_quantity /              │
//! │       submit_order / show_order_history / logout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront is an explicitly constructed object: created at session
//! start, discarded at session end, passed by reference to consumers. No
//! ambient globals.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::capability::{AuthProvider, DataStore, NoteKind, Notifier, Renderer, Role, UserProfile};
use crate::cart::CartStore;
use crate::catalog::MenuCatalog;
use crate::submit::{DeliveryForm, OrderSubmitter, SubmitOutcome};
use fooddash_core::PricingConfig;

// =============================================================================
// Session Gate
// =============================================================================

/// Where the session check routes the visitor.
pub enum SessionGate {
    /// A signed-in customer with a live storefront.
    Customer(Storefront),
    /// Nobody is signed in; the UI should route to its login flow.
    RequiresLogin,
    /// The admin account; the UI should route to the admin console.
    Admin,
}

// =============================================================================
// Storefront
// =============================================================================

/// A live customer session: catalog, cart, delivery form, and submitter.
pub struct Storefront {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DataStore>,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn Notifier>,
    user: UserProfile,
    catalog: Arc<MenuCatalog>,
    cart: CartStore,
    form: DeliveryForm,
    submitter: OrderSubmitter,
}

impl Storefront {
    /// Opens a session: auth gate, one catalog load, initial paint.
    pub async fn open(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DataStore>,
        renderer: Arc<dyn Renderer>,
        notifier: Arc<dyn Notifier>,
        pricing: PricingConfig,
    ) -> SessionGate {
        let session = match auth.check_session().await {
            Ok(session) => session,
            Err(e) => {
                // A broken auth backend reads as "signed out", never a crash
                warn!(error = %e, "Session check failed; treating as signed out");
                None
            }
        };

        let Some(session) = session else {
            info!("No session; login required");
            return SessionGate::RequiresLogin;
        };

        if session.role == Role::Admin {
            info!("Admin session; routing to admin console");
            return SessionGate::Admin;
        }

        info!(user = %session.user.display_name(), "Customer session started");

        let catalog = Arc::new(MenuCatalog::load(store.as_ref()).await);
        let cart = CartStore::new(
            catalog.clone(),
            pricing,
            renderer.clone(),
            notifier.clone(),
        );
        let submitter = OrderSubmitter::new(store.clone(), renderer.clone(), notifier.clone());

        // Initial paint: full menu, empty cart (submit disabled)
        renderer.render_menu(catalog.products());
        cart.render();

        SessionGate::Customer(Storefront {
            auth,
            store,
            renderer,
            notifier,
            user: session.user,
            catalog,
            cart,
            form: DeliveryForm::new(),
            submitter,
        })
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Adds one unit of a product to the cart.
    pub fn add_item(&self, product_id: &str) {
        debug!(product_id = %product_id, "add_item command");
        self.cart.add_item(product_id);
    }

    /// Removes a product's line from the cart.
    pub fn remove_item(&self, product_id: &str) {
        debug!(product_id = %product_id, "remove_item command");
        self.cart.remove_item(product_id);
    }

    /// Applies a quantity delta to a product's line.
    pub fn update_quantity(&self, product_id: &str, delta: i64) {
        debug!(product_id = %product_id, delta = %delta, "update_quantity command");
        self.cart.update_quantity(product_id, delta);
    }

    /// Submits the cart as an order with the form's delivery details.
    pub async fn submit_order(&self) -> SubmitOutcome {
        self.submitter.submit(&self.cart, &self.form).await
    }

    /// Fetches and renders the order history (newest first).
    ///
    /// A fetch failure is absorbed: logged, one error toast, no crash.
    pub async fn show_order_history(&self) {
        debug!("show_order_history command");
        match self.store.list_orders().await {
            Ok(orders) => {
                info!(count = orders.len(), "Order history loaded");
                self.renderer.render_order_history(&orders);
            }
            Err(e) => {
                error!(error = %e, "Failed to load order history");
                self.notifier.show(
                    NoteKind::Error,
                    "Could not load your orders. Please try again later.",
                );
            }
        }
    }

    /// Signs the customer out. Failures are logged, never propagated.
    pub async fn logout(&self) {
        debug!("logout command");
        if let Err(e) = self.auth.logout().await {
            warn!(error = %e, "Logout failed");
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The signed-in user (navbar greeting).
    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// The session catalog.
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// The session cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The delivery-detail form.
    pub fn delivery_form(&self) -> &DeliveryForm {
        &self.form
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
