//! # rpm-core: Pure Business Logic for the Restaurant Profit Manager
//!
//! This crate is the **heart** of the Restaurant Profit Manager. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Restaurant Profit Manager Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Interactive Shell (apps/cli)                 │   │
//! │  │    menu add ──► cart add ──► order place ──► summary / export  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ rpm-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  ledger   │  │  profit   │  │   │
//! │  │   │ MenuItem  │  │ CartLine  │  │  Order    │  │ revenue   │  │   │
//! │  │   │ inventory │  │ qty rules │  │ snapshots │  │ net/gross │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO ID GENERATION • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rpm-store (Persistence Layer)                  │   │
//! │  │          key-value JSON collections, loaded/saved by the app    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, Expense, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The sellable menu with optional inventory tracking
//! - [`cart`] - Transient order staging
//! - [`ledger`] - The append-only order ledger and `place_order`
//! - [`expense`] - The expense ledger
//! - [`profit`] - Revenue / COGS / gross / net aggregation
//! - [`export`] - CSV rendering of the order ledger
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, clocks, and id generators are FORBIDDEN here;
//!    timestamps and ids are passed in by the caller
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Fail Open**: Domain operations degrade to no-ops rather than raise errors;
//!    typed errors exist only where Rust genuinely needs them (parsing, rendering)
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use rpm_core::{Cart, Catalog, Money, NewMenuItem, OrderLedger};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(
//!     "burger".to_string(),
//!     NewMenuItem {
//!         name: "Chicken Burger".to_string(),
//!         price_cents: 750,
//!         cost_cents: 300,
//!         inventory: Some(50),
//!     },
//! );
//!
//! let mut cart = Cart::new();
//! cart.add_line("burger");
//! cart.add_line("burger");
//!
//! let mut ledger = OrderLedger::new();
//! let order = ledger
//!     .place_order(&mut cart, &mut catalog, "order-1".to_string(), Utc::now(), None)
//!     .expect("cart was not empty");
//!
//! assert_eq!(order.subtotal(), Money::from_cents(1500));
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod expense;
pub mod export;
pub mod ledger;
pub mod money;
pub mod profit;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rpm_core::Money` instead of
// `use rpm_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use expense::ExpenseLedger;
pub use export::{export_file_name, orders_to_csv, ExportError};
pub use ledger::OrderLedger;
pub use money::{Money, ParseMoneyError};
pub use profit::{summarize, ProfitSummary};
pub use types::*;
