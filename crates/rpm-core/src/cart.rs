//! # Cart
//!
//! The transient staging area between the menu and the order ledger.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  add_line(item_id) ───► qty += 1 if the line exists, else push qty=1   │
//! │  set_qty(item_id, n) ─► n ≤ 0 removes the line, else overwrites qty    │
//! │  clear() ─────────────► empties the cart                               │
//! │                                                                         │
//! │  No operation here touches the catalog or the order ledger; the       │
//! │  coupling happens only in OrderLedger::place_order.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is deliberately ephemeral: it is never persisted, so a fresh
//! session always starts empty.

use crate::types::CartLine;

/// The current cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item bumps its qty)
/// - Quantity is always positive (setting qty ≤ 0 removes the line)
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of the given item.
    ///
    /// Increments the quantity if a line for `item_id` already exists,
    /// otherwise appends a new line with qty 1. The id is not checked
    /// against the catalog here; unresolvable lines are skipped downstream.
    pub fn add_line(&mut self, item_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.qty += 1;
            return;
        }
        self.lines.push(CartLine {
            item_id: item_id.to_string(),
            qty: 1,
        });
    }

    /// Overwrites the quantity of a line.
    ///
    /// A qty ≤ 0 removes the line. Absent lines are a silent no-op either
    /// way.
    pub fn set_qty(&mut self, item_id: &str, qty: i64) {
        if qty <= 0 {
            self.lines.retain(|l| l.item_id != item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.qty = qty;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The staged lines, in the order items were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
