//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds context and categorization           │
//! │       │                                                                 │
//! │       ├── reads:  swallowed by load_collection → empty collection      │
//! │       └── writes: logged by the session, never crash the app          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full
    /// - File permissions issue
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A collection failed to serialize to JSON.
    ///
    /// Deserialization failures never reach callers; malformed stored data
    /// is treated as an empty collection at the read helpers.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
