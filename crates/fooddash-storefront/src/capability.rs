//! # Capability Contracts
//!
//! Abstract contracts for everything the session consumes from outside:
//! authentication, the hosted data backend, rendering, and notifications.
//! Concrete bindings live with the embedding application (a web frontend, a
//! terminal app, a test harness) - never here.
//!
//! ## Why Traits?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Capability Boundaries                               │
//! │                                                                         │
//! │     Storefront session                         External collaborator    │
//! │     ──────────────────                         ──────────────────────   │
//! │     check_session / logout  ◄──AuthProvider──► hosted auth (magic       │
//! │                                                link, OAuth, admin)      │
//! │     list products / orders  ◄──DataStore─────► hosted database          │
//! │     insert_order                                                        │
//! │     render menu/cart/history ──Renderer──────► DOM / terminal / test    │
//! │     toasts                   ──Notifier──────► toast stack / stdout     │
//! │                                                                         │
//! │  The session NEVER constructs markup and NEVER sees credentials.        │
//! │  Admin credential checks live behind AuthProvider, not here.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Auth and data calls cross the network, so those traits are async
//! (`async-trait` keeps them object-safe). Rendering and notification sinks
//! are synchronous fire-and-forget.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::cart::CartView;
use crate::error::StoreError;
use fooddash_core::{OrderPayload, OrderRecord, Product};

// =============================================================================
// Notice Timing
// =============================================================================

/// How long a notification stays visible before auto-dismissing.
pub const NOTICE_VISIBLE_MS: u64 = 3500;

/// Duration of the notification exit transition.
pub const NOTICE_EXIT_MS: u64 = 300;

// =============================================================================
// Sessions
// =============================================================================

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A signed-in customer (magic link or OAuth).
    Customer,
    /// The admin account. The storefront redirects admins away; the admin
    /// console is an external collaborator.
    Admin,
}

/// Profile of the signed-in user, as reported by the auth backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    /// Name to greet the user with: full name, else email, else "Customer".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Customer")
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub user: UserProfile,
}

// =============================================================================
// Auth Provider
// =============================================================================

/// Authentication capability.
///
/// Session establishment (magic link, OAuth, admin login) happens entirely
/// on the provider's side; the storefront only ever asks "who is signed in
/// right now" and "sign out".
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the current session, or `None` when nobody is signed in.
    async fn check_session(&self) -> Result<Option<Session>, StoreError>;

    /// Ends the current session.
    async fn logout(&self) -> Result<(), StoreError>;
}

// =============================================================================
// Data Store
// =============================================================================

/// Persistence capability backed by the hosted database.
///
/// The storefront holds no durable state of its own: products and orders
/// live behind this trait, the cart never does.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Products currently available for ordering, oldest first
    /// (creation-time ascending).
    async fn list_available_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Persists a submitted order.
    async fn insert_order(&self, order: &OrderPayload) -> Result<(), StoreError>;

    /// Past orders, newest first (creation-time descending), each preserving
    /// its `items` exactly as stored.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError>;
}

// =============================================================================
// Renderer
// =============================================================================

/// State of the submit affordance, pushed to the renderer by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum SubmitState {
    /// No submission in flight. `enabled` follows the normal render rule:
    /// the action is available iff the cart is non-empty.
    Idle { enabled: bool },
    /// A submission is in flight; the action is disabled and an in-progress
    /// affordance ("Placing Order...") should be shown.
    InFlight,
}

/// Rendering capability.
///
/// Receives immutable snapshots; the session never builds markup. Calls are
/// fire-and-forget: a renderer must not fail back into the session.
pub trait Renderer: Send + Sync {
    /// Paints the menu grid.
    fn render_menu(&self, products: &[Product]);

    /// Paints the cart panel (lines, badge count, pricing breakdown).
    /// Called after every cart mutation.
    fn render_cart(&self, view: &CartView);

    /// Paints the order-history list.
    fn render_order_history(&self, orders: &[OrderRecord]);

    /// Updates the submit affordance.
    fn set_submit_state(&self, state: SubmitState);
}

// =============================================================================
// Notifier
// =============================================================================

/// Kind of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Success,
    Error,
}

/// Notification capability (the toast stack in the web frontend).
///
/// Bindings auto-dismiss a notice after [`NOTICE_VISIBLE_MS`] with a
/// [`NOTICE_EXIT_MS`] exit transition.
pub trait Notifier: Send + Sync {
    fn show(&self, kind: NoteKind, message: &str);
}

// =============================================================================
// Unit Tests
// =============================================================================
