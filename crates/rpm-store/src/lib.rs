//! # rpm-store: Persistence Layer for the Restaurant Profit Manager
//!
//! Key-value JSON persistence behind an injectable trait.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Persistence Contract                              │
//! │                                                                         │
//! │  App startup                       App mutation                         │
//! │      │                                  │                               │
//! │      ▼                                  ▼                               │
//! │  load_collection("rpm_menu")      save_collection("rpm_menu", items)   │
//! │      │                                  │                               │
//! │      ▼                                  ▼                               │
//! │  ┌───────────────────────────────────────────────┐                     │
//! │  │        trait KvStore (load / save / clear)    │                     │
//! │  └───────────┬──────────────────────┬────────────┘                     │
//! │              │                      │                                   │
//! │      ┌───────▼───────┐      ┌───────▼───────┐                          │
//! │      │ JsonFileStore │      │  MemoryStore  │                          │
//! │      │ <key>.json    │      │  (tests)      │                          │
//! │      └───────────────┘      └───────────────┘                          │
//! │                                                                         │
//! │  Read failures load as EMPTY collections. Write failures surface as   │
//! │  StoreError; the app layer logs and continues.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Keys
//! Three independent keys, one per collection: [`KEY_MENU`], [`KEY_ORDERS`],
//! [`KEY_EXPENSES`].

pub mod error;
pub mod json_file;
pub mod kv;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use kv::{load_collection, save_collection, KvStore};
pub use memory::MemoryStore;

// =============================================================================
// Storage Keys
// =============================================================================

/// Key under which the menu catalog is persisted.
pub const KEY_MENU: &str = "rpm_menu";

/// Key under which the order ledger is persisted.
pub const KEY_ORDERS: &str = "rpm_orders";

/// Key under which the expense ledger is persisted.
pub const KEY_EXPENSES: &str = "rpm_expenses";
