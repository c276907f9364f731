//! # Error Types
//!
//! Domain-specific error types for fooddash-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fooddash-core errors (this file)                                      │
//! │  └── ValidationError  - Order precondition failures                    │
//! │                                                                         │
//! │  fooddash-storefront errors (separate crate)                           │
//! │  └── StoreError       - Hosted backend failures                        │
//! │                                                                         │
//! │  Flow: ValidationError ──► Notifier message (never a crash)            │
//! │        StoreError      ──► absorbed at the boundary + logged           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message
//! 4. Nothing here is fatal: validation failures are recovered locally

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Order precondition failures.
///
/// Raised before an order submission may begin. Surfaced to the customer as
/// a non-fatal notification; never propagated as a crash and never mutates
/// any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required delivery field is missing or blank after trimming.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The cart has no lines; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
