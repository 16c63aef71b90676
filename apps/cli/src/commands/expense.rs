//! # Expense Commands

use clap::Subcommand;

use rpm_core::Money;

use crate::session::Session;

/// `expense <subcommand>` - record operating expenses.
#[derive(Debug, Subcommand)]
pub enum ExpenseCmd {
    /// Record an expense
    Add {
        /// Expense name (quote multi-word names)
        name: String,
        /// Amount, e.g. 45.00
        amount: Money,
    },
    /// Remove an expense by id
    Remove {
        /// Expense id (from `expense list`)
        id: String,
    },
    /// List recorded expenses
    List,
}

pub fn run(session: &mut Session, cmd: ExpenseCmd) {
    match cmd {
        ExpenseCmd::Add { name, amount } => {
            let id = session.add_expense(name, amount);
            println!("added {id}");
        }
        ExpenseCmd::Remove { id } => {
            if session.remove_expense(&id) {
                println!("removed {id}");
            } else {
                println!("no expense with id {id}");
            }
        }
        ExpenseCmd::List => list(session),
    }
}

fn list(session: &Session) {
    if session.expenses().is_empty() {
        println!("no expenses recorded");
        return;
    }
    println!("{:<36}  {:<24} {:>10}", "ID", "NAME", "AMOUNT");
    for expense in session.expenses() {
        println!(
            "{:<36}  {:<24} {:>10}",
            expense.id,
            expense.name,
            expense.amount().to_string()
        );
    }
}
