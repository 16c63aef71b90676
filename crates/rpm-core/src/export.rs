//! # CSV Export
//!
//! Renders the order ledger as a comma-separated table, one row per
//! (order, line-item) pair.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Header:                                                                │
//! │    orderId, timestamp, itemName, price, cost, qty,                     │
//! │    orderSubtotal, orderCogs                                            │
//! │                                                                         │
//! │  Every field is double-quoted; embedded quotes are doubled.            │
//! │  Money values are plain two-decimal strings ("7.50").                  │
//! │  Timestamps are RFC 3339.                                              │
//! │  Zero orders → a single header row.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The subtotal and COGS columns repeat the ORDER totals on every row of
//! that order, so each row is self-contained for spreadsheet pivots.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::money::Money;
use crate::types::Order;

/// The export column headers, in output order.
const CSV_HEADER: [&str; 8] = [
    "orderId",
    "timestamp",
    "itemName",
    "price",
    "cost",
    "qty",
    "orderSubtotal",
    "orderCogs",
];

/// Errors rendering the CSV export.
///
/// In practice these cannot occur when writing to an in-memory buffer, but
/// the csv writer's contract surfaces them and we propagate rather than
/// panic.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record failed to serialize.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The writer could not be flushed into its buffer.
    #[error("CSV buffer flush failed: {0}")]
    Flush(String),

    /// The rendered bytes were not valid UTF-8.
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders all orders as a CSV document.
///
/// One row per (order, line-item) pair, newest order first, matching ledger
/// order. Zero orders yield the header row only.
pub fn orders_to_csv(orders: &[Order]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for order in orders {
        let timestamp = order.timestamp.to_rfc3339();
        let subtotal = order.subtotal().decimal_string();
        let cogs = order.cogs().decimal_string();
        for line in &order.items {
            writer.write_record([
                order.id.as_str(),
                timestamp.as_str(),
                line.name.as_str(),
                Money::from_cents(line.price_cents).decimal_string().as_str(),
                Money::from_cents(line.cost_cents).decimal_string().as_str(),
                line.qty.to_string().as_str(),
                subtotal.as_str(),
                cogs.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// The download-style file name for an export taken on `date`:
/// `orders_<ISO-date>.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("orders_{}.csv", date.format("%Y-%m-%d"))
}

// =============================================================================
// Unit Tests
// =============================================================================
