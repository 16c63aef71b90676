//! # Domain Types
//!
//! Core domain types used throughout the Restaurant Profit Manager.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Order       │   │    Expense      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  timestamp      │   │  name           │       │
//! │  │  price_cents    │   │  items[]        │   │  amount_cents   │       │
//! │  │  cost_cents     │   │  subtotal_cents │   └─────────────────┘       │
//! │  │  inventory?     │   │  cogs_cents     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    CartLine     │   │   OrderLine     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  item_id (live) │   │  name (frozen)  │                             │
//! │  │  qty            │   │  price (frozen) │                             │
//! │  └─────────────────┘   │  cost  (frozen) │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! `CartLine.item_id` is a LIVE reference into the catalog; resolving it can
//! fail if the item was deleted, and callers silently skip such lines.
//! `OrderLine` is the opposite: a FROZEN copy of name/price/cost captured at
//! order time, immune to later catalog edits or deletions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier (UUID v4), assigned by the caller at creation.
    pub id: String,

    /// Display name shown in the menu and on order lines.
    pub name: String,

    /// Sale price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Unit cost in cents (for COGS calculations).
    pub cost_cents: i64,

    /// Current inventory count. Inventory tracking is opt-in per item:
    /// `None` means untracked and the field is omitted from JSON entirely.
    /// When present it is never negative (decrements floor at zero).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
}

impl MenuItem {
    /// Returns the sale price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the unit cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

/// Payload for adding a menu item. The id is assigned by the caller of
/// [`crate::Catalog::add`], keeping the core free of id generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub inventory: Option<i64>,
}

/// A partial update for a menu item.
///
/// Fields left `None` keep their current value. Note that `inventory` can be
/// replaced but never UNSET through a patch, matching how updates have always
/// merged fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub cost_cents: Option<i64>,
    pub inventory: Option<i64>,
}

// =============================================================================
// Cart Line
// =============================================================================

/// A staged selection of one menu item.
///
/// Transient: lives only between "add to cart" and "place order" (or a cart
/// clear), and is never persisted. The `item_id` is a live catalog
/// reference; lines whose item has been deleted are skipped, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    /// Always positive; a qty ≤ 0 removes the line instead.
    pub qty: i64,
}

// =============================================================================
// Order
// =============================================================================

/// A finalized order: an immutable snapshot of cart contents and catalog
/// pricing at the moment it was placed.
///
/// Never mutated after creation; removed only by a full ledger reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the order was placed.
    pub timestamp: DateTime<Utc>,

    /// Snapshot lines, in cart order.
    pub items: Vec<OrderLine>,

    /// Σ price×qty over `items`, in cents.
    pub subtotal_cents: i64,

    /// Σ cost×qty over `items`, in cents.
    pub cogs_cents: i64,

    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Order {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the cost of goods sold as Money.
    #[inline]
    pub fn cogs(&self) -> Money {
        Money::from_cents(self.cogs_cents)
    }
}

/// A line item in an order.
/// Uses the snapshot pattern to freeze menu data at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name at order time (frozen).
    pub name: String,
    /// Sale price in cents at order time (frozen).
    pub price_cents: i64,
    /// Unit cost in cents at order time (frozen).
    pub cost_cents: i64,
    /// Quantity ordered.
    pub qty: i64,
    /// The originating catalog id. Kept for traceability only; the catalog
    /// entry may be edited or deleted without affecting this line.
    pub item_id: String,
}

impl OrderLine {
    /// Returns the frozen sale price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the frozen unit cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Line revenue (price × qty).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.qty)
    }

    /// Line cost (cost × qty).
    #[inline]
    pub fn line_cogs(&self) -> Money {
        self.cost().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Expense
// =============================================================================

/// A named operating expense, independent of any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub amount_cents: i64,
}

impl Expense {
    /// Returns the expense amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
