//! # Session
//!
//! The single controller owning all application state, with persistence as
//! an injected dependency.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Session                                       │
//! │                                                                         │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐  ┌────────────────┐     │
//! │  │ Catalog  │  │   Cart   │  │ OrderLedger  │  │ ExpenseLedger  │     │
//! │  │ (saved)  │  │ (never   │  │ (saved)      │  │ (saved)        │     │
//! │  │          │  │  saved)  │  │              │  │                │     │
//! │  └──────────┘  └──────────┘  └──────────────┘  └────────────────┘     │
//! │                                                                         │
//! │                      Box<dyn KvStore> (injected)                        │
//! │                                                                         │
//! │  Persistence policy: each collection is loaded once at open and saved  │
//! │  after EVERY mutation to it. Write failures are logged and swallowed;  │
//! │  the in-memory state stays authoritative for the rest of the session.  │
//! │  The cart is deliberately ephemeral and has no storage key.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids (UUID v4) and timestamps are generated HERE and passed into the core
//! operations, which keeps rpm-core deterministic.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use rpm_core::{
    summarize, Cart, CartLine, Catalog, Expense, ExpenseLedger, ExportError, MenuItem,
    MenuItemPatch, Money, NewMenuItem, Order, OrderLedger, ProfitSummary,
};
use rpm_store::{
    load_collection, save_collection, KvStore, KEY_EXPENSES, KEY_MENU, KEY_ORDERS,
};

/// Application state plus its persistence seam.
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    orders: OrderLedger,
    expenses: ExpenseLedger,
    store: Box<dyn KvStore>,
}

impl Session {
    /// Opens a session over the given store, loading all three collections
    /// fail-open. The cart always starts empty.
    pub fn open(store: Box<dyn KvStore>) -> Self {
        let catalog = Catalog::from_items(load_collection(store.as_ref(), KEY_MENU));
        let orders = OrderLedger::from_orders(load_collection(store.as_ref(), KEY_ORDERS));
        let expenses =
            ExpenseLedger::from_expenses(load_collection(store.as_ref(), KEY_EXPENSES));

        info!(
            menu_items = catalog.len(),
            orders = orders.len(),
            expenses = expenses.len(),
            "session opened"
        );

        Session {
            catalog,
            cart: Cart::new(),
            orders,
            expenses,
            store,
        }
    }

    // =========================================================================
    // Persistence (save after every mutation, swallow-and-warn on failure)
    // =========================================================================

    fn persist_menu(&self) {
        if let Err(err) = save_collection(self.store.as_ref(), KEY_MENU, self.catalog.items()) {
            warn!(%err, "failed to persist menu");
        }
    }

    fn persist_orders(&self) {
        if let Err(err) = save_collection(self.store.as_ref(), KEY_ORDERS, self.orders.orders()) {
            warn!(%err, "failed to persist orders");
        }
    }

    fn persist_expenses(&self) {
        if let Err(err) =
            save_collection(self.store.as_ref(), KEY_EXPENSES, self.expenses.expenses())
        {
            warn!(%err, "failed to persist expenses");
        }
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Adds a menu item and returns its freshly assigned id.
    pub fn add_menu_item(&mut self, item: NewMenuItem) -> String {
        let id = Uuid::new_v4().to_string();
        self.catalog.add(id.clone(), item);
        self.persist_menu();
        info!(item_id = %id, "menu item added");
        id
    }

    /// Applies a partial update. Returns `false` if the id is unknown.
    pub fn update_menu_item(&mut self, id: &str, patch: &MenuItemPatch) -> bool {
        let updated = self.catalog.update(id, patch);
        if updated {
            self.persist_menu();
            info!(item_id = %id, "menu item updated");
        }
        updated
    }

    /// Removes a menu item. Historical orders keep their snapshots; cart
    /// lines for the item simply stop resolving.
    pub fn remove_menu_item(&mut self, id: &str) -> bool {
        let removed = self.catalog.remove(id);
        if removed {
            self.persist_menu();
            info!(item_id = %id, "menu item removed");
        }
        removed
    }

    /// The live menu, in insertion order.
    pub fn menu(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    /// Looks up a single menu item.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.catalog.get(id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Stages one more unit of an item. Not persisted; the cart is
    /// ephemeral.
    pub fn add_to_cart(&mut self, item_id: &str) {
        self.cart.add_line(item_id);
    }

    /// Overwrites a staged quantity (≤ 0 removes the line).
    pub fn set_cart_qty(&mut self, item_id: &str, qty: i64) {
        self.cart.set_qty(item_id, qty);
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// The raw staged lines, including ones that no longer resolve.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The staged lines paired with their live menu items. Lines whose item
    /// was deleted are silently skipped, display-only no-ops.
    pub fn resolved_cart(&self) -> Vec<(&MenuItem, i64)> {
        self.cart
            .lines()
            .iter()
            .filter_map(|line| self.catalog.get(&line.item_id).map(|item| (item, line.qty)))
            .collect()
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Finalizes the cart into an order.
    ///
    /// Persists the order ledger AND the menu (inventory changed) when an
    /// order was actually placed. Returns `None` for an empty or fully
    /// stale cart, touching nothing.
    pub fn place_order(&mut self, note: Option<String>) -> Option<Order> {
        let id = Uuid::new_v4().to_string();
        let order =
            self.orders
                .place_order(&mut self.cart, &mut self.catalog, id, Utc::now(), note)?;

        self.persist_orders();
        self.persist_menu();
        info!(
            order_id = %order.id,
            subtotal = %order.subtotal(),
            cogs = %order.cogs(),
            items = order.items.len(),
            "order placed"
        );
        Some(order)
    }

    /// All orders, newest first.
    pub fn orders(&self) -> &[Order] {
        self.orders.orders()
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Records an expense and returns its freshly assigned id.
    pub fn add_expense(&mut self, name: String, amount: Money) -> String {
        let id = Uuid::new_v4().to_string();
        self.expenses.add(id.clone(), name, amount);
        self.persist_expenses();
        info!(expense_id = %id, amount = %amount, "expense added");
        id
    }

    /// Removes an expense. Returns `false` if the id is unknown.
    pub fn remove_expense(&mut self, id: &str) -> bool {
        let removed = self.expenses.remove(id);
        if removed {
            self.persist_expenses();
            info!(expense_id = %id, "expense removed");
        }
        removed
    }

    /// All expenses, in recording order.
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.expenses()
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Recomputes the profit summary from the current ledgers.
    pub fn profit(&self) -> ProfitSummary {
        summarize(self.orders.orders(), self.expenses.expenses())
    }

    /// Renders the order ledger as CSV.
    pub fn export_orders_csv(&self) -> Result<String, ExportError> {
        rpm_core::orders_to_csv(self.orders.orders())
    }

    // =========================================================================
    // Bulk Actions
    // =========================================================================

    /// Replaces the menu with the canonical three-item sample and clears
    /// both ledgers. No confirmation; this mirrors the one-click sample
    /// loader the tool has always had.
    pub fn seed_sample(&mut self) {
        let sample = vec![
            NewMenuItem {
                name: "Chicken Burger".to_string(),
                price_cents: 750,
                cost_cents: 300,
                inventory: Some(50),
            },
            NewMenuItem {
                name: "Fries".to_string(),
                price_cents: 300,
                cost_cents: 60,
                inventory: Some(200),
            },
            NewMenuItem {
                name: "Coke".to_string(),
                price_cents: 150,
                cost_cents: 20,
                inventory: Some(100),
            },
        ];

        let items = sample
            .into_iter()
            .map(|item| MenuItem {
                id: Uuid::new_v4().to_string(),
                name: item.name,
                price_cents: item.price_cents,
                cost_cents: item.cost_cents,
                inventory: item.inventory,
            })
            .collect();
        self.catalog.replace_all(items);
        self.orders.clear_all();
        self.expenses.clear_all();

        self.persist_menu();
        self.persist_orders();
        self.persist_expenses();
        info!("sample menu seeded");
    }

    /// Empties the order and expense ledgers. The menu is untouched.
    pub fn reset_day(&mut self) {
        self.orders.clear_all();
        self.expenses.clear_all();
        self.persist_orders();
        self.persist_expenses();
        info!("day reset: orders and expenses cleared");
    }

    /// Wipes all persisted state and reloads in place.
    ///
    /// The page-based original wiped storage and reloaded the page; here we
    /// reload every collection from the freshly wiped store and drop the
    /// cart, which is observationally identical.
    pub fn clear_storage(&mut self) {
        if let Err(err) = self.store.clear_all() {
            warn!(%err, "failed to clear storage");
        }
        self.catalog = Catalog::from_items(load_collection(self.store.as_ref(), KEY_MENU));
        self.orders = OrderLedger::from_orders(load_collection(self.store.as_ref(), KEY_ORDERS));
        self.expenses =
            ExpenseLedger::from_expenses(load_collection(self.store.as_ref(), KEY_EXPENSES));
        self.cart = Cart::new();
        info!("all storage cleared");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rpm_store::MemoryStore;
    use std::sync::Arc;

    fn new_item(name: &str, price_cents: i64, cost_cents: i64, inventory: Option<i64>) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            price_cents,
            cost_cents,
            inventory,
        }
    }

    fn open_shared() -> (Arc<MemoryStore>, Session) {
        let store = Arc::new(MemoryStore::new());
        let session = Session::open(Box::new(store.clone()));
        (store, session)
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (store, mut session) = open_shared();

        session.add_menu_item(new_item("Burger", 750, 300, Some(50)));
        assert!(store.load(KEY_MENU).unwrap().is_some());

        session.add_expense("Gas".to_string(), Money::from_cents(4500));
        assert!(store.load(KEY_EXPENSES).unwrap().is_some());
    }

    #[test]
    fn test_reopened_session_sees_state_but_empty_cart() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session = Session::open(Box::new(store.clone()));
            let id = session.add_menu_item(new_item("Burger", 750, 300, None));
            session.add_to_cart(&id);
            session.place_order(None).unwrap();
            session.add_to_cart(&id); // staged but never persisted
        }

        let session = Session::open(Box::new(store));
        assert_eq!(session.menu().len(), 1);
        assert_eq!(session.orders().len(), 1);
        assert!(session.cart_lines().is_empty());
    }

    #[test]
    fn test_place_order_full_cycle() {
        let (_, mut session) = open_shared();
        let burger = session.add_menu_item(new_item("Chicken Burger", 750, 300, Some(50)));
        let fries = session.add_menu_item(new_item("Fries", 300, 60, None));

        session.add_to_cart(&burger);
        session.add_to_cart(&burger);
        session.add_to_cart(&fries);

        let order = session.place_order(Some("table 2".to_string())).unwrap();
        assert_eq!(order.subtotal_cents, 1800);
        assert_eq!(order.cogs_cents, 660);
        assert_eq!(session.menu_item(&burger).unwrap().inventory, Some(48));
        assert!(session.menu_item(&fries).unwrap().inventory.is_none());
        assert!(session.cart_lines().is_empty());
    }

    #[test]
    fn test_place_order_empty_cart_is_noop() {
        let (_, mut session) = open_shared();
        assert!(session.place_order(None).is_none());
        assert!(session.orders().is_empty());
    }

    #[test]
    fn test_resolved_cart_skips_deleted_items() {
        let (_, mut session) = open_shared();
        let burger = session.add_menu_item(new_item("Burger", 750, 300, None));
        let ghost = session.add_menu_item(new_item("Special", 900, 400, None));

        session.add_to_cart(&burger);
        session.add_to_cart(&ghost);
        session.remove_menu_item(&ghost);

        let resolved = session.resolved_cart();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.name, "Burger");
        // The raw line is still staged; only display skips it.
        assert_eq!(session.cart_lines().len(), 2);
    }

    #[test]
    fn test_profit_over_session() {
        let (_, mut session) = open_shared();
        let burger = session.add_menu_item(new_item("Burger", 750, 300, None));
        session.add_to_cart(&burger);
        session.place_order(None).unwrap();
        session.add_expense("Ice".to_string(), Money::from_cents(100));

        let summary = session.profit();
        assert_eq!(summary.total_revenue.cents(), 750);
        assert_eq!(summary.gross_profit.cents(), 450);
        assert_eq!(summary.net_profit.cents(), 350);
    }

    #[test]
    fn test_reset_day_keeps_menu() {
        let (_, mut session) = open_shared();
        let burger = session.add_menu_item(new_item("Burger", 750, 300, None));
        session.add_to_cart(&burger);
        session.place_order(None).unwrap();
        session.add_expense("Gas".to_string(), Money::from_cents(4500));

        session.reset_day();

        assert_eq!(session.menu().len(), 1);
        assert!(session.orders().is_empty());
        assert!(session.expenses().is_empty());
    }

    #[test]
    fn test_seed_sample_replaces_menu_and_clears_ledgers() {
        let (_, mut session) = open_shared();
        let old = session.add_menu_item(new_item("Old Item", 100, 50, None));
        session.add_expense("Gas".to_string(), Money::from_cents(4500));

        session.seed_sample();

        assert_eq!(session.menu().len(), 3);
        assert!(session.menu_item(&old).is_none());
        assert_eq!(session.menu()[0].name, "Chicken Burger");
        assert_eq!(session.menu()[0].inventory, Some(50));
        assert!(session.orders().is_empty());
        assert!(session.expenses().is_empty());
    }

    #[test]
    fn test_clear_storage_wipes_everything() {
        let (store, mut session) = open_shared();
        let burger = session.add_menu_item(new_item("Burger", 750, 300, None));
        session.add_to_cart(&burger);
        session.add_expense("Gas".to_string(), Money::from_cents(4500));

        session.clear_storage();

        assert!(session.menu().is_empty());
        assert!(session.orders().is_empty());
        assert!(session.expenses().is_empty());
        assert!(session.cart_lines().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_csv_via_session() {
        let (_, mut session) = open_shared();
        let csv = session.export_orders_csv().unwrap();
        assert_eq!(csv.lines().count(), 1); // header only

        let burger = session.add_menu_item(new_item("Burger", 750, 300, None));
        session.add_to_cart(&burger);
        session.place_order(None).unwrap();

        let csv = session.export_orders_csv().unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"7.50\""));
    }

    #[test]
    fn test_malformed_stored_state_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.save(KEY_MENU, "{definitely not json").unwrap();
        store.save(KEY_ORDERS, "[{\"wrong\": \"shape\"}]").unwrap();

        let session = Session::open(Box::new(store));
        assert!(session.menu().is_empty());
        assert!(session.orders().is_empty());
    }
}
