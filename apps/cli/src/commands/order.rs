//! # Order Commands

use clap::Subcommand;

use crate::session::Session;

/// `order <subcommand>` - finalize the cart and browse the ledger.
#[derive(Debug, Subcommand)]
pub enum OrderCmd {
    /// Place an order from the current cart
    Place {
        /// Optional free-text note (e.g. "table 4")
        #[arg(long)]
        note: Option<String>,
    },
    /// List the day's orders, newest first
    List,
}

pub fn run(session: &mut Session, cmd: OrderCmd) {
    match cmd {
        OrderCmd::Place { note } => match session.place_order(note) {
            Some(order) => {
                println!(
                    "order {} placed: subtotal {}, cogs {}",
                    order.id,
                    order.subtotal(),
                    order.cogs()
                );
            }
            // Empty cart (or nothing resolvable) is a quiet no-op.
            None => println!("cart is empty - nothing to place"),
        },
        OrderCmd::List => list(session),
    }
}

fn list(session: &Session) {
    if session.orders().is_empty() {
        println!("no orders yet");
        return;
    }
    println!("orders ({})", session.orders().len());
    for order in session.orders() {
        let note = order
            .note
            .as_deref()
            .map(|n| format!("  note: {n}"))
            .unwrap_or_default();
        println!(
            "{}  {}  subtotal {}  cogs {}{}",
            order.id,
            order.timestamp.to_rfc3339(),
            order.subtotal(),
            order.cogs(),
            note
        );
        for line in &order.items {
            println!("    {} x {} @ {} (cost {})", line.qty, line.name, line.price(), line.cost());
        }
    }
}
