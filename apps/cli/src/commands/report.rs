//! # Report Commands
//!
//! The summary panel and the CSV export.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use rpm_core::export_file_name;

use crate::session::Session;

/// Prints the profit summary, recomputed from the ledgers on every call.
pub fn summary(session: &Session) {
    let p = session.profit();
    println!("{:<14} {}", "Revenue", p.total_revenue);
    println!("{:<14} {}", "COGS", p.total_cogs);
    println!("{:<14} {}", "Gross Profit", p.gross_profit);
    println!("{:<14} {}", "Expenses", p.total_expenses);
    println!("{:<14} {}", "Net Profit", p.net_profit);
}

/// Writes the orders CSV to `path`, defaulting to `orders_<ISO-date>.csv`
/// in the working directory.
///
/// Failures are reported inline; the shell keeps running.
pub fn export(session: &Session, path: Option<PathBuf>) {
    let path = path.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
    let csv = match session.export_orders_csv() {
        Ok(csv) => csv,
        Err(err) => {
            println!("export failed: {err}");
            return;
        }
    };
    match fs::write(&path, csv) {
        Ok(()) => {
            info!(path = %path.display(), "orders exported");
            println!("wrote {}", path.display());
        }
        Err(err) => println!("export failed: {err}"),
    }
}
