//! # Profit Calculator
//!
//! A pure function of the two ledgers. Nothing here is cached or
//! incrementally maintained: every read recomputes the reductions from
//! scratch, which is exact with integer cents and trivially cheap at this
//! scale.
//!
//! ## The Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   total_revenue  = Σ order.subtotal                                     │
//! │   total_cogs     = Σ order.cogs                                         │
//! │   gross_profit   = total_revenue - total_cogs                           │
//! │   total_expenses = Σ expense.amount                                     │
//! │   net_profit     = gross_profit - total_expenses                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Expense, Order};

/// Aggregate figures over the order and expense ledgers.
///
/// All fields are zero for empty ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub total_revenue: Money,
    pub total_cogs: Money,
    pub gross_profit: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
}

/// Computes the profit summary for the given ledger states.
pub fn summarize(orders: &[Order], expenses: &[Expense]) -> ProfitSummary {
    let total_revenue: Money = orders.iter().map(Order::subtotal).sum();
    let total_cogs: Money = orders.iter().map(Order::cogs).sum();
    let gross_profit = total_revenue - total_cogs;
    let total_expenses: Money = expenses.iter().map(Expense::amount).sum();
    let net_profit = gross_profit - total_expenses;

    ProfitSummary {
        total_revenue,
        total_cogs,
        gross_profit,
        total_expenses,
        net_profit,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(subtotal_cents: i64, cogs_cents: i64) -> Order {
        Order {
            id: "o".to_string(),
            timestamp: Utc::now(),
            items: Vec::new(),
            subtotal_cents,
            cogs_cents,
            note: None,
        }
    }

    fn expense(amount_cents: i64) -> Expense {
        Expense {
            id: "e".to_string(),
            name: "expense".to_string(),
            amount_cents,
        }
    }

    #[test]
    fn test_empty_ledgers_yield_zero() {
        let summary = summarize(&[], &[]);
        assert!(summary.total_revenue.is_zero());
        assert!(summary.total_cogs.is_zero());
        assert!(summary.gross_profit.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.net_profit.is_zero());
    }

    #[test]
    fn test_net_profit_formula() {
        let orders = [order(1800, 660), order(450, 120)];
        let expenses = [expense(500), expense(250)];

        let summary = summarize(&orders, &expenses);
        assert_eq!(summary.total_revenue.cents(), 2250);
        assert_eq!(summary.total_cogs.cents(), 780);
        assert_eq!(summary.gross_profit.cents(), 1470);
        assert_eq!(summary.total_expenses.cents(), 750);
        // net = (Σ subtotal − Σ cogs) − Σ expenses
        assert_eq!(summary.net_profit.cents(), 720);
    }

    #[test]
    fn test_net_profit_can_go_negative() {
        let orders = [order(1000, 400)];
        let expenses = [expense(2000)];

        let summary = summarize(&orders, &expenses);
        assert_eq!(summary.net_profit.cents(), -1400);
    }

    #[test]
    fn test_expenses_without_orders() {
        let summary = summarize(&[], &[expense(300)]);
        assert!(summary.gross_profit.is_zero());
        assert_eq!(summary.net_profit.cents(), -300);
    }
}
