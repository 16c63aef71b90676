//! # Catalog
//!
//! The collection of sellable menu items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Operations                                 │
//! │                                                                         │
//! │  add(id, item) ──────────────► append (no field validation)            │
//! │  update(id, patch) ──────────► merge patch; absent id = silent no-op   │
//! │  remove(id) ─────────────────► delete entry only                       │
//! │                                 (never cascades into cart or ledger)   │
//! │  decrement_inventory(id, n) ─► max(0, inventory - n) when tracked      │
//! │                                                                         │
//! │  Insertion order is preserved: the menu lists in the order items      │
//! │  were added.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deliberate Permissiveness
//! Negative price/cost values are stored as entered. Tightening that is a
//! product decision, not a catalog rule; input collection is the only gate.

use crate::types::{MenuItem, MenuItemPatch, NewMenuItem};

/// The live menu. Vec-backed to preserve insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Rebuilds a catalog from previously persisted items.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Catalog { items }
    }

    /// Appends a new item under the caller-assigned id.
    ///
    /// No validation beyond what input collection performs; price and cost
    /// are stored exactly as given.
    pub fn add(&mut self, id: String, item: NewMenuItem) {
        self.items.push(MenuItem {
            id,
            name: item.name,
            price_cents: item.price_cents,
            cost_cents: item.cost_cents,
            inventory: item.inventory,
        });
    }

    /// Merges `patch` into the item with the given id.
    ///
    /// Fields left `None` in the patch are preserved. A patch can replace
    /// the inventory count but never unset it.
    ///
    /// Returns `false` (a silent no-op) if no such item exists.
    pub fn update(&mut self, id: &str, patch: &MenuItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return false;
        };
        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(price_cents) = patch.price_cents {
            item.price_cents = price_cents;
        }
        if let Some(cost_cents) = patch.cost_cents {
            item.cost_cents = cost_cents;
        }
        if let Some(inventory) = patch.inventory {
            item.inventory = Some(inventory);
        }
        true
    }

    /// Deletes the item with the given id.
    ///
    /// Does not touch the cart or the order ledger: cart lines referencing
    /// the removed item become unresolvable and are skipped downstream, and
    /// historical orders keep their own snapshots.
    ///
    /// Returns `false` if no such item existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        self.items.len() != before
    }

    /// Decrements the item's inventory by `qty`, flooring at zero.
    ///
    /// Items without an inventory count are left untouched (tracking is
    /// opt-in per item), as are unknown ids.
    pub fn decrement_inventory(&mut self, id: &str, qty: i64) {
        if let Some(item) = self.items.iter_mut().find(|it| it.id == id) {
            if let Some(inventory) = item.inventory {
                item.inventory = Some((inventory - qty).max(0));
            }
        }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|it| it.id == id)
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Replaces the entire menu (used by the sample seed).
    pub fn replace_all(&mut self, items: Vec<MenuItem>) {
        self.items = items;
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
