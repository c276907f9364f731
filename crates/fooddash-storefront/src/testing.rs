//! Test doubles for the capability traits.
//!
//! Recording renderer/notifier sinks, an in-memory backend with switchable
//! failure modes, a fixed auth provider, and a gated backend for exercising
//! the in-flight submission guard. Test-only; nothing here ships.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;

use crate::capability::{
    AuthProvider, DataStore, NoteKind, Notifier, Renderer, Role, Session, SubmitState, UserProfile,
};
use crate::cart::CartView;
use crate::catalog::MenuCatalog;
use crate::error::StoreError;
use fooddash_core::{OrderPayload, OrderRecord, Product};

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "burger".to_string(),
            name: "Classic Burger".to_string(),
            price_cents: 15000, // ₹150.00
            rating: "4.6 ★ (210)".to_string(),
            image: "https://img.example.com/burger.jpg".to_string(),
        },
        Product {
            id: "fries".to_string(),
            name: "Masala Fries".to_string(),
            price_cents: 8000, // ₹80.00
            rating: "4.4 ★ (98)".to_string(),
            image: "https://img.example.com/fries.jpg".to_string(),
        },
        Product {
            id: "cola".to_string(),
            name: "Cold Cola".to_string(),
            price_cents: 4000, // ₹40.00
            rating: "4.5 ★ (64)".to_string(),
            image: "https://img.example.com/cola.jpg".to_string(),
        },
    ]
}

pub(crate) fn sample_catalog() -> MenuCatalog {
    MenuCatalog::from_products(sample_products())
}

pub(crate) fn customer_session(name: &str) -> Session {
    Session {
        role: Role::Customer,
        user: UserProfile {
            name: Some(name.to_string()),
            email: None,
        },
    }
}

// =============================================================================
// Recording Renderer
// =============================================================================

#[derive(Debug, Clone)]
pub(crate) enum RenderEvent {
    Menu(usize),
    Cart(CartView),
    History(usize),
    Submit(SubmitState),
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub(crate) fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn cart_renders(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, RenderEvent::Cart(_)))
            .count()
    }

    pub(crate) fn last_cart_view(&self) -> Option<CartView> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Cart(view) => Some(view),
            _ => None,
        })
    }

    pub(crate) fn submit_states(&self) -> Vec<SubmitState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Submit(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn last_history_len(&self) -> Option<usize> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::History(count) => Some(count),
            _ => None,
        })
    }

    fn push(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn render_menu(&self, products: &[Product]) {
        self.push(RenderEvent::Menu(products.len()));
    }

    fn render_cart(&self, view: &CartView) {
        self.push(RenderEvent::Cart(view.clone()));
    }

    fn render_order_history(&self, orders: &[OrderRecord]) {
        self.push(RenderEvent::History(orders.len()));
    }

    fn set_submit_state(&self, state: SubmitState) {
        self.push(RenderEvent::Submit(state));
    }
}

// =============================================================================
// Recording Notifier
// =============================================================================

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notes: Mutex<Vec<(NoteKind, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn notes(&self) -> Vec<(NoteKind, String)> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, kind: NoteKind, message: &str) {
        self.notes.lock().unwrap().push((kind, message.to_string()));
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// In-memory `DataStore` with switchable failure modes.
pub(crate) struct MemStore {
    products: Vec<Product>,
    orders: Mutex<Vec<OrderRecord>>,
    products_down: AtomicBool,
    insert_down: AtomicBool,
    orders_down: AtomicBool,
}

impl MemStore {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        MemStore {
            products,
            orders: Mutex::new(Vec::new()),
            products_down: AtomicBool::new(false),
            insert_down: AtomicBool::new(false),
            orders_down: AtomicBool::new(false),
        }
    }

    pub(crate) fn fail_product_list(&self) {
        self.products_down.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_insert(&self) {
        self.insert_down.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_order_list(&self) {
        self.orders_down.store(true, Ordering::SeqCst);
    }

    /// Stored orders in insertion order.
    pub(crate) fn orders(&self) -> Vec<OrderRecord> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataStore for MemStore {
    async fn list_available_products(&self) -> Result<Vec<Product>, StoreError> {
        if self.products_down.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("products table offline"));
        }
        Ok(self.products.clone())
    }

    async fn insert_order(&self, order: &OrderPayload) -> Result<(), StoreError> {
        if self.insert_down.load(Ordering::SeqCst) {
            return Err(StoreError::rejected("insert refused"));
        }
        let mut orders = self.orders.lock().unwrap();
        let record = OrderRecord {
            id: format!("order-{}", orders.len() + 1),
            customer_name: order.customer_name.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            items: order.items.clone(),
            total_amount_cents: order.total_amount_cents,
            created_at: Utc::now(),
        };
        orders.push(record);
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        if self.orders_down.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("orders table offline"));
        }
        // Newest first, like the hosted backend
        let mut orders = self.orders.lock().unwrap().clone();
        orders.reverse();
        Ok(orders)
    }
}

// =============================================================================
// Gated Backend
// =============================================================================

/// Backend whose `insert_order` parks until released; lets a test hold a
/// submission in flight while it probes the re-entrancy guard.
pub(crate) struct GatedStore {
    gate: Notify,
    insert_calls: AtomicUsize,
}

impl GatedStore {
    pub(crate) fn new() -> Self {
        GatedStore {
            gate: Notify::new(),
            insert_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataStore for GatedStore {
    async fn list_available_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert_order(&self, _order: &OrderPayload) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(Vec::new())
    }
}

// =============================================================================
// Fixed Auth Provider
// =============================================================================

/// Auth provider that always reports the same session.
pub(crate) struct StaticAuth {
    session: Option<Session>,
    check_down: AtomicBool,
    logout_down: AtomicBool,
    logout_calls: AtomicUsize,
}

impl StaticAuth {
    pub(crate) fn new(session: Option<Session>) -> Self {
        StaticAuth {
            session,
            check_down: AtomicBool::new(false),
            logout_down: AtomicBool::new(false),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fail_check(&self) {
        self.check_down.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_logout(&self) {
        self.logout_down.store(true, Ordering::SeqCst);
    }

    pub(crate) fn logouts(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn check_session(&self) -> Result<Option<Session>, StoreError> {
        if self.check_down.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("auth backend offline"));
        }
        Ok(self.session.clone())
    }

    async fn logout(&self) -> Result<(), StoreError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_down.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("auth backend offline"));
        }
        Ok(())
    }
}
