//! # Order Submission
//!
//! The order submission state machine and the delivery-detail form.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Submission                                     │
//! │                                                                         │
//! │            ┌──────── preconditions fail ────────┐                       │
//! │            │   (error toast, NO state change)   │                       │
//! │            ▼                                    │                       │
//! │  ┌──────────┐     ┌────────────┐     ┌──────────┴─┐                     │
//! │  │   Idle   │────►│ Submitting │────►│ Succeeded  │──► Idle             │
//! │  └──────────┘     └─────┬──────┘     └────────────┘  (cart cleared,     │
//! │       ▲                 │                             form cleared)     │
//! │       │                 │            ┌────────────┐                     │
//! │       │                 └───────────►│  Failed    │──► Idle             │
//! │       │                              └────────────┘  (cart & form       │
//! │       │                                               PRESERVED)        │
//! │       └── submit affordance restored on BOTH paths ──┘                  │
//! │                                                                         │
//! │  While Submitting the submit trigger is disabled. That disable is the   │
//! │  sole re-entrancy guard: the backend has no idempotency key, so a       │
//! │  second in-flight call must never start.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, error, info};

use crate::capability::{DataStore, NoteKind, Notifier, Renderer, SubmitState};
use crate::cart::CartStore;
use fooddash_core::validation::validate_delivery_details;
use fooddash_core::{DeliveryDetails, OrderPayload, ValidationError};

// =============================================================================
// Delivery Form
// =============================================================================

/// Session-held delivery-detail fields.
///
/// Holds raw input; trimming and required-checks happen at submission time.
/// Cleared only after a successful order - a failed submission keeps every
/// field so the customer can retry without retyping.
#[derive(Debug, Default)]
pub struct DeliveryForm {
    details: Mutex<DeliveryDetails>,
}

impl DeliveryForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        DeliveryForm::default()
    }

    /// Sets the customer name field.
    pub fn set_name(&self, value: &str) {
        self.with_details_mut(|d| d.name = value.to_string());
    }

    /// Sets the phone field.
    pub fn set_phone(&self, value: &str) {
        self.with_details_mut(|d| d.phone = value.to_string());
    }

    /// Sets the address field.
    pub fn set_address(&self, value: &str) {
        self.with_details_mut(|d| d.address = value.to_string());
    }

    /// Replaces all fields at once.
    pub fn set_details(&self, details: DeliveryDetails) {
        self.with_details_mut(|d| *d = details);
    }

    /// Returns a copy of the current field values.
    pub fn details(&self) -> DeliveryDetails {
        self.details.lock().expect("form mutex poisoned").clone()
    }

    /// Blanks every field (runs after a successful order).
    pub fn clear(&self) {
        self.with_details_mut(|d| *d = DeliveryDetails::default());
    }

    fn with_details_mut<F>(&self, f: F)
    where
        F: FnOnce(&mut DeliveryDetails),
    {
        let mut details = self.details.lock().expect("form mutex poisoned");
        f(&mut details);
    }
}

// =============================================================================
// Submit Outcome
// =============================================================================

/// Result of a `submit_order` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The order was persisted; cart and form were cleared.
    Placed,
    /// A precondition failed; nothing changed.
    Rejected(ValidationError),
    /// The backend refused or was unreachable; cart and form preserved.
    Failed,
    /// Another submission is already in flight; this call did nothing.
    InFlight,
}

// =============================================================================
// Order Submitter
// =============================================================================

/// Drives one order submission at a time against the backend.
pub struct OrderSubmitter {
    store: Arc<dyn DataStore>,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
}

impl OrderSubmitter {
    /// Creates a submitter in the Idle state.
    pub fn new(
        store: Arc<dyn DataStore>,
        renderer: Arc<dyn Renderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        OrderSubmitter {
            store,
            renderer,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits the current cart with the form's delivery details.
    ///
    /// ## Preconditions (checked before entering Submitting)
    /// Each fails fast with an error toast and zero state change:
    /// - name, phone, address all non-empty after trimming
    /// - cart non-empty
    ///
    /// ## Outcomes
    /// - Backend accepted: cart cleared, form cleared, success toast.
    /// - Backend failed: cart and form untouched, generic error toast.
    /// In both cases the submit affordance is restored from the tail of this
    /// function, so the UI can never stay stuck in the submitting state.
    pub async fn submit(&self, cart: &CartStore, form: &DeliveryForm) -> SubmitOutcome {
        debug!("submit_order command");

        if self.in_flight.load(Ordering::SeqCst) {
            // The trigger is disabled while in flight; a second call is a
            // caller bug, not a user-facing condition.
            debug!("submit_order ignored: already in flight");
            return SubmitOutcome::InFlight;
        }

        let details = match validate_delivery_details(&form.details()) {
            Ok(details) => details,
            Err(e) => {
                debug!(error = %e, "submit_order rejected");
                self.notifier
                    .show(NoteKind::Error, "Please fill in all delivery details.");
                return SubmitOutcome::Rejected(e);
            }
        };

        if let Err(e) = cart.validate_non_empty() {
            debug!("submit_order rejected: empty cart");
            self.notifier
                .show(NoteKind::Error, "Your cart is empty. Add items first!");
            return SubmitOutcome::Rejected(e);
        }

        // Enter Submitting. compare_exchange closes the race window between
        // the load above and here on a multithreaded runtime.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SubmitOutcome::InFlight;
        }
        self.renderer.set_submit_state(SubmitState::InFlight);

        // Snapshot the order now; later cart edits cannot touch it
        let breakdown = cart.breakdown();
        let payload = OrderPayload {
            customer_name: details.name,
            phone: details.phone,
            address: details.address,
            items: cart.order_items(),
            total_amount_cents: breakdown.total_cents,
        };
        info!(
            items = payload.items.len(),
            total = %breakdown.total(),
            "Submitting order"
        );

        let outcome = match self.store.insert_order(&payload).await {
            Ok(()) => {
                cart.clear();
                form.clear();
                self.notifier
                    .show(NoteKind::Success, "Order placed successfully! 🎉");
                info!("Order placed");
                SubmitOutcome::Placed
            }
            Err(e) => {
                // Cart and form stay exactly as they were for a retry
                error!(error = %e, "Order insert failed");
                self.notifier
                    .show(NoteKind::Error, "Failed to place order. Please try again.");
                SubmitOutcome::Failed
            }
        };

        // Unconditional cleanup: both arms fall through to here
        self.in_flight.store(false, Ordering::SeqCst);
        self.renderer.set_submit_state(SubmitState::Idle {
            enabled: !cart.is_empty(),
        });

        outcome
    }

    /// Whether a submission is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        sample_catalog, GatedStore, MemStore, RecordingNotifier, RecordingRenderer,
    };
    use fooddash_core::PricingConfig;

    struct Rig {
        store: Arc<MemStore>,
        cart: Arc<CartStore>,
        form: DeliveryForm,
        submitter: OrderSubmitter,
        renderer: Arc<RecordingRenderer>,
        notifier: Arc<RecordingNotifier>,
    }

    fn rig() -> Rig {
        let store = Arc::new(MemStore::with_products(Vec::new()));
        let renderer = Arc::new(RecordingRenderer::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = Arc::new(CartStore::new(
            Arc::new(sample_catalog()),
            PricingConfig::default(),
            renderer.clone(),
            notifier.clone(),
        ));
        let submitter = OrderSubmitter::new(store.clone(), renderer.clone(), notifier.clone());
        Rig {
            store,
            cart,
            form: DeliveryForm::new(),
            submitter,
            renderer,
            notifier,
        }
    }

    fn fill_form(form: &DeliveryForm) {
        form.set_name("Asha Rao");
        form.set_phone("9812897289");
        form.set_address("42 MG Road, Delhi");
    }

    #[tokio::test]
    async fn test_successful_submit_clears_cart_and_form() {
        let rig = rig();
        rig.cart.add_item("burger");
        rig.cart.add_item("burger");
        rig.cart.add_item("fries");
        fill_form(&rig.form);

        let outcome = rig.submitter.submit(&rig.cart, &rig.form).await;

        assert_eq!(outcome, SubmitOutcome::Placed);
        assert!(rig.cart.is_empty());
        assert_eq!(rig.cart.breakdown().total_cents, 0);
        assert_eq!(rig.form.details(), DeliveryDetails::default());

        let orders = rig.store.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer_name, "Asha Rao");
        assert_eq!(orders[0].total_amount_cents, 43900);
        assert_eq!(orders[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_submit_state_restored_after_success() {
        let rig = rig();
        rig.cart.add_item("cola");
        fill_form(&rig.form);

        rig.submitter.submit(&rig.cart, &rig.form).await;

        assert!(!rig.submitter.is_in_flight());
        // InFlight was shown, then Idle; cart is now empty so disabled
        assert_eq!(
            rig.renderer.submit_states(),
            vec![SubmitState::InFlight, SubmitState::Idle { enabled: false }]
        );
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_cart_and_form() {
        let rig = rig();
        rig.store.fail_insert();
        rig.cart.add_item("burger");
        fill_form(&rig.form);
        let view_before = rig.cart.view();
        let details_before = rig.form.details();

        let outcome = rig.submitter.submit(&rig.cart, &rig.form).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(rig.store.orders().len(), 0);

        // Cart and form untouched, ready for a retry
        let view_after = rig.cart.view();
        assert_eq!(view_after.lines.len(), view_before.lines.len());
        assert_eq!(
            view_after.breakdown.total_cents,
            view_before.breakdown.total_cents
        );
        assert_eq!(rig.form.details(), details_before);

        // Affordance re-enabled: the cart is still non-empty
        assert_eq!(
            rig.renderer.submit_states(),
            vec![SubmitState::InFlight, SubmitState::Idle { enabled: true }]
        );
        assert!(!rig.submitter.is_in_flight());

        let notes = rig.notifier.notes();
        assert_eq!(notes.last().unwrap().0, NoteKind::Error);
    }

    #[tokio::test]
    async fn test_missing_details_fail_fast() {
        let rig = rig();
        rig.cart.add_item("burger");
        rig.form.set_name("   "); // blank after trimming
        rig.form.set_phone("9812897289");
        rig.form.set_address("42 MG Road");

        let outcome = rig.submitter.submit(&rig.cart, &rig.form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::Required { field: "name" })
        );
        // No transition happened: no store call, no submit-state events
        assert_eq!(rig.store.orders().len(), 0);
        assert!(rig.renderer.submit_states().is_empty());
        assert!(!rig.cart.is_empty());

        let notes = rig.notifier.notes();
        assert_eq!(
            notes.last().unwrap().1,
            "Please fill in all delivery details."
        );
    }

    #[tokio::test]
    async fn test_empty_cart_fails_fast() {
        let rig = rig();
        fill_form(&rig.form);

        let outcome = rig.submitter.submit(&rig.cart, &rig.form).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::EmptyCart));
        assert_eq!(rig.store.orders().len(), 0);
        assert!(rig.renderer.submit_states().is_empty());
        assert_eq!(
            rig.notifier.notes().last().unwrap().1,
            "Your cart is empty. Add items first!"
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_noop() {
        let store = Arc::new(GatedStore::new());
        let renderer = Arc::new(RecordingRenderer::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = Arc::new(CartStore::new(
            Arc::new(sample_catalog()),
            PricingConfig::default(),
            renderer.clone(),
            notifier.clone(),
        ));
        let form = Arc::new(DeliveryForm::new());
        let submitter = Arc::new(OrderSubmitter::new(
            store.clone(),
            renderer.clone(),
            notifier.clone(),
        ));

        cart.add_item("burger");
        fill_form(&form);

        let first = {
            let (submitter, cart, form) = (submitter.clone(), cart.clone(), form.clone());
            tokio::spawn(async move { submitter.submit(&cart, &form).await })
        };

        // Let the first submission reach the gated insert call
        while !submitter.is_in_flight() {
            tokio::task::yield_now().await;
        }

        let second = submitter.submit(&cart, &form).await;
        assert_eq!(second, SubmitOutcome::InFlight);
        assert_eq!(store.insert_calls(), 1);

        store.release();
        let first = first.await.expect("submit task panicked");
        assert_eq!(first, SubmitOutcome::Placed);
    }

    #[tokio::test]
    async fn test_payload_total_matches_displayed_breakdown() {
        let rig = rig();
        rig.cart.add_item("burger");
        rig.cart.update_quantity("burger", 2); // qty 3
        fill_form(&rig.form);

        let displayed = rig.cart.breakdown().total_cents;
        rig.submitter.submit(&rig.cart, &rig.form).await;

        assert_eq!(rig.store.orders()[0].total_amount_cents, displayed);
    }
}
