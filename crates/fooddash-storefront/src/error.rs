//! # Backend Error Types
//!
//! Error type for operations that cross into the hosted backend.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (network, rejection, bad response)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Absorbed at the session boundary:                                      │
//! │    catalog load  → empty menu + error log                               │
//! │    order insert  → Failed submission, cart & form preserved             │
//! │    history fetch → error toast                                          │
//! │                                                                         │
//! │  NOTHING propagates as a crash.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Hosted-backend operation errors.
///
/// Concrete `DataStore`/`AuthProvider` bindings map their transport errors
/// into these categories; the session only ever logs them and degrades.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend could not be reached (network failure, timeout).
    #[error("backend unreachable: {0}")]
    Unavailable(String),

    /// The backend answered but refused the operation.
    #[error("backend rejected the request: {0}")]
    Rejected(String),

    /// The backend answered with something we could not decode.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Creates an Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    /// Creates a Rejected error.
    pub fn rejected(message: impl Into<String>) -> Self {
        StoreError::Rejected(message.into())
    }

    /// Creates a Malformed error.
    pub fn malformed(message: impl Into<String>) -> Self {
        StoreError::Malformed(message.into())
    }
}

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;
