//! # Shell Commands Module
//!
//! One module per command area, mirroring the panels of the tool's UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Menu item CRUD
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Order placement and listing
//! ├── expense.rs  ◄─── Expense recording
//! └── report.rs   ◄─── Summary and CSV export
//! ```
//!
//! ## How Commands Work
//! Each module contributes a clap `Subcommand` enum (the grammar for one
//! shell line) and a `run` handler that applies it to the [`Session`] and
//! prints the result. Handlers never return errors: failures print a
//! message and the prompt comes back, matching the fail-open behavior of
//! the domain itself.
//!
//! [`Session`]: crate::session::Session

pub mod cart;
pub mod expense;
pub mod menu;
pub mod order;
pub mod report;
