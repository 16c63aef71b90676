//! # Menu Commands

use clap::Subcommand;

use rpm_core::{MenuItemPatch, Money, NewMenuItem};

use crate::session::Session;

/// `menu <subcommand>` - manage the sellable menu.
#[derive(Debug, Subcommand)]
pub enum MenuCmd {
    /// Add a menu item
    Add {
        /// Display name
        name: String,
        /// Sale price, e.g. 7.50
        price: Money,
        /// Unit cost, e.g. 3.00
        cost: Money,
        /// Opt into inventory tracking with a starting count
        #[arg(long)]
        inventory: Option<i64>,
    },
    /// Update fields of an existing item
    Update {
        /// Item id (from `menu list`)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Money>,
        #[arg(long)]
        cost: Option<Money>,
        #[arg(long)]
        inventory: Option<i64>,
    },
    /// Remove an item (historical orders keep their snapshots)
    Remove {
        /// Item id
        id: String,
    },
    /// List the menu
    List,
}

pub fn run(session: &mut Session, cmd: MenuCmd) {
    match cmd {
        MenuCmd::Add {
            name,
            price,
            cost,
            inventory,
        } => {
            let id = session.add_menu_item(NewMenuItem {
                name,
                price_cents: price.cents(),
                cost_cents: cost.cents(),
                inventory,
            });
            println!("added {id}");
        }
        MenuCmd::Update {
            id,
            name,
            price,
            cost,
            inventory,
        } => {
            let patch = MenuItemPatch {
                name,
                price_cents: price.map(|m| m.cents()),
                cost_cents: cost.map(|m| m.cents()),
                inventory,
            };
            if session.update_menu_item(&id, &patch) {
                println!("updated {id}");
            } else {
                println!("no menu item with id {id}");
            }
        }
        MenuCmd::Remove { id } => {
            if session.remove_menu_item(&id) {
                println!("removed {id}");
            } else {
                println!("no menu item with id {id}");
            }
        }
        MenuCmd::List => list(session),
    }
}

fn list(session: &Session) {
    if session.menu().is_empty() {
        println!("menu is empty - add items or run `seed`");
        return;
    }
    println!(
        "{:<36}  {:<24} {:>8} {:>8} {:>6}",
        "ID", "NAME", "PRICE", "COST", "INV"
    );
    for item in session.menu() {
        let inventory = item
            .inventory
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<36}  {:<24} {:>8} {:>8} {:>6}",
            item.id,
            item.name,
            item.price().to_string(),
            item.cost().to_string(),
            inventory
        );
    }
}
