//! # Order Ledger
//!
//! The append-only, newest-first list of finalized orders, and the one
//! operation that couples the cart, the catalog, and the ledger.
//!
//! ## place_order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        place_order                                      │
//! │                                                                         │
//! │  Cart (live refs)          Catalog                  Ledger              │
//! │  ────────────────          ───────                  ──────              │
//! │                                                                         │
//! │  [burger ×2] ───resolve──► name/price/cost ──────► OrderLine (frozen)  │
//! │  [fries  ×1] ───resolve──► name/price/cost ──────► OrderLine (frozen)  │
//! │  [ghost  ×1] ───resolve──► (deleted) ────────────► skipped, silently   │
//! │                                                                         │
//! │  subtotal = Σ price×qty          cogs = Σ cost×qty                     │
//! │                                                                         │
//! │  1. prepend Order to ledger (newest first)                             │
//! │  2. decrement_inventory(item, qty) for every frozen line               │
//! │  3. clear the cart                                                     │
//! │                                                                         │
//! │  The whole sequence runs under one &mut borrow: callers can never     │
//! │  observe a half-applied order.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Open Edge Cases
//! - Empty cart: returns `None`, nothing touched.
//! - Every line stale (item deleted): nothing resolves, so no order is
//!   created and the cart is left as-is. Same observable outcome as the
//!   empty-cart case.

use chrono::{DateTime, Utc};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{Order, OrderLine};

/// The day's finalized orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger { orders: Vec::new() }
    }

    /// Rebuilds a ledger from previously persisted orders.
    ///
    /// Orders are stored newest-first, so the persisted sequence is taken
    /// as-is.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        OrderLedger { orders }
    }

    /// Finalizes the cart into a new order.
    ///
    /// Snapshots every resolvable cart line at current catalog pricing,
    /// prepends the order, decrements tracked inventory, and clears the
    /// cart. The id and timestamp come from the caller; the core stays free
    /// of clocks and id generation.
    ///
    /// Returns `None` without touching anything when the cart is empty or
    /// no line resolves.
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        catalog: &mut Catalog,
        id: String,
        now: DateTime<Utc>,
        note: Option<String>,
    ) -> Option<Order> {
        if cart.is_empty() {
            return None;
        }

        // Snapshot pass: lines whose item was deleted are silently skipped.
        let items: Vec<OrderLine> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                catalog.get(&line.item_id).map(|item| OrderLine {
                    name: item.name.clone(),
                    price_cents: item.price_cents,
                    cost_cents: item.cost_cents,
                    qty: line.qty,
                    item_id: item.id.clone(),
                })
            })
            .collect();

        if items.is_empty() {
            return None;
        }

        let subtotal: Money = items.iter().map(OrderLine::line_total).sum();
        let cogs: Money = items.iter().map(OrderLine::line_cogs).sum();

        let order = Order {
            id,
            timestamp: now,
            items,
            subtotal_cents: subtotal.cents(),
            cogs_cents: cogs.cents(),
            note,
        };

        for line in &order.items {
            catalog.decrement_inventory(&line.item_id, line.qty);
        }

        // Newest first
        self.orders.insert(0, order.clone());
        cart.clear();

        Some(order)
    }

    /// Empties the ledger. Idempotent; used by the day reset.
    pub fn clear_all(&mut self) {
        self.orders.clear();
    }

    /// All orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewMenuItem;
    use chrono::TimeZone;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(
            "burger".to_string(),
            NewMenuItem {
                name: "Chicken Burger".to_string(),
                price_cents: 750,
                cost_cents: 300,
                inventory: Some(50),
            },
        );
        catalog.add(
            "fries".to_string(),
            NewMenuItem {
                name: "Fries".to_string(),
                price_cents: 300,
                cost_cents: 60,
                inventory: None,
            },
        );
        catalog
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_place_order_totals() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");
        cart.add_line("burger");
        cart.add_line("fries");

        let mut ledger = OrderLedger::new();
        let order = ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();

        // 2 × $7.50 + 1 × $3.00 = $18.00; 2 × $3.00 + 1 × $0.60 = $6.60
        assert_eq!(order.subtotal_cents, 1800);
        assert_eq!(order.cogs_cents, 660);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].qty, 2);
    }

    #[test]
    fn test_place_order_decrements_tracked_inventory_only() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");
        cart.add_line("burger");
        cart.add_line("fries");

        let mut ledger = OrderLedger::new();
        ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();

        assert_eq!(catalog.get("burger").unwrap().inventory, Some(48));
        // Fries never had an inventory field; it stays absent.
        assert!(catalog.get("fries").unwrap().inventory.is_none());
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");
        cart.add_line("fries");

        let mut ledger = OrderLedger::new();
        ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_is_silent_noop() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();

        let result = ledger.place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None);
        assert!(result.is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_stale_line_skipped_but_order_placed() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");
        cart.add_line("fries");
        catalog.remove("fries");

        let mut ledger = OrderLedger::new();
        let order = ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Chicken Burger");
        assert_eq!(order.subtotal_cents, 750);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_all_stale_cart_places_nothing_and_keeps_cart() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("fries");
        catalog.remove("fries");

        let mut ledger = OrderLedger::new();
        let result = ledger.place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None);

        assert!(result.is_none());
        assert!(ledger.is_empty());
        // Nothing resolved, so nothing was committed and the cart stays.
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_orders_are_newest_first() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();

        cart.add_line("burger");
        ledger
            .place_order(&mut cart, &mut catalog, "first".to_string(), ts(), None)
            .unwrap();
        cart.add_line("fries");
        ledger
            .place_order(&mut cart, &mut catalog, "second".to_string(), ts(), None)
            .unwrap();

        assert_eq!(ledger.orders()[0].id, "second");
        assert_eq!(ledger.orders()[1].id, "first");
    }

    #[test]
    fn test_snapshot_survives_catalog_edits() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");

        let mut ledger = OrderLedger::new();
        ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();

        // Editing and deleting after the fact never alters historical figures.
        catalog.update(
            "burger",
            &crate::types::MenuItemPatch {
                price_cents: Some(9999),
                ..Default::default()
            },
        );
        catalog.remove("burger");

        let order = &ledger.orders()[0];
        assert_eq!(order.items[0].price_cents, 750);
        assert_eq!(order.subtotal_cents, 750);
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");

        let mut ledger = OrderLedger::new();
        ledger
            .place_order(&mut cart, &mut catalog, "o1".to_string(), ts(), None)
            .unwrap();

        ledger.clear_all();
        assert!(ledger.is_empty());
        ledger.clear_all();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_note_is_carried() {
        let mut catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_line("burger");

        let mut ledger = OrderLedger::new();
        let order = ledger
            .place_order(
                &mut cart,
                &mut catalog,
                "o1".to_string(),
                ts(),
                Some("table 4".to_string()),
            )
            .unwrap();
        assert_eq!(order.note.as_deref(), Some("table 4"));
    }
}
