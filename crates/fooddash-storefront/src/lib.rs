//! # fooddash-storefront: Session Layer for FoodDash
//!
//! Owns the customer session and its state machine. Everything external -
//! auth, persistence, rendering, notifications - is consumed through the
//! capability traits in [`capability`], so any UI layer (web, terminal, test
//! harness) can drive the same command interface.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FoodDash Session Data Flow                         │
//! │                                                                         │
//! │  AuthProvider ──► Storefront::open ──► SessionGate                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  DataStore ──► MenuCatalog (loaded once, immutable per session)         │
//! │                        │                                                │
//! │        user commands   ▼                                                │
//! │  add_item ────────► CartStore ──recompute──► PricingBreakdown           │
//! │  remove_item            │                        │                      │
//! │  update_quantity        │                        ▼                      │
//! │                         └──────────────► Renderer::render_cart          │
//! │                                                                         │
//! │  submit_order ──► OrderSubmitter ──► DataStore::insert_order            │
//! │                        │                  │                             │
//! │                        │     Ok: clear cart+form, success toast         │
//! │                        │     Err: keep cart+form, error toast           │
//! │                        └── submit affordance restored on BOTH paths     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`capability`] - `AuthProvider`, `DataStore`, `Renderer`, `Notifier`
//! - [`catalog`] - session product catalog
//! - [`cart`] - `CartStore` and its view snapshots
//! - [`submit`] - `OrderSubmitter` state machine and the delivery form
//! - [`session`] - `Storefront`: the command interface a UI binds to
//! - [`error`] - backend error type

// =============================================================================
// Module Declarations
// =============================================================================

pub mod capability;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod session;
pub mod submit;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use capability::{
    AuthProvider, DataStore, NoteKind, Notifier, Renderer, Role, Session, SubmitState,
    UserProfile,
};
pub use cart::{CartLineView, CartStore, CartView};
pub use catalog::MenuCatalog;
pub use error::StoreError;
pub use session::{SessionGate, Storefront};
pub use submit::{DeliveryForm, OrderSubmitter, SubmitOutcome};
