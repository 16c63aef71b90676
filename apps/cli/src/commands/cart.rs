//! # Cart Commands

use clap::Subcommand;

use rpm_core::Money;

use crate::session::Session;

/// `cart <subcommand>` - stage items before placing an order.
#[derive(Debug, Subcommand)]
pub enum CartCmd {
    /// Add one unit of a menu item to the cart
    Add {
        /// Item id (from `menu list`)
        item_id: String,
    },
    /// Overwrite a staged quantity (0 removes the line)
    Qty {
        /// Item id
        item_id: String,
        /// New quantity
        qty: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show,
}

pub fn run(session: &mut Session, cmd: CartCmd) {
    match cmd {
        CartCmd::Add { item_id } => {
            session.add_to_cart(&item_id);
            if session.menu_item(&item_id).is_none() {
                // Staging an unknown id is allowed; it just never resolves.
                println!("staged {item_id} (not currently on the menu)");
            } else {
                println!("staged {item_id}");
            }
        }
        CartCmd::Qty { item_id, qty } => {
            session.set_cart_qty(&item_id, qty);
            println!("ok");
        }
        CartCmd::Clear => {
            session.clear_cart();
            println!("cart cleared");
        }
        CartCmd::Show => show(session),
    }
}

fn show(session: &Session) {
    let resolved = session.resolved_cart();
    if resolved.is_empty() {
        println!("cart is empty - add items from the menu");
        return;
    }
    let mut total = Money::zero();
    for (item, qty) in &resolved {
        let line_total = item.price().multiply_quantity(*qty);
        println!("{:<24} {} x {} = {}", item.name, item.price(), qty, line_total);
        total += line_total;
    }
    println!("{:<24} {}", "total", total);
}
