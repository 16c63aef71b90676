//! # App Error Type
//!
//! The error type for startup and top-level shell failures.
//!
//! Note how little reaches this type: domain operations degrade to no-ops
//! by design, the session swallows store write failures with a warning, and
//! export problems are reported inline by the shell. What remains is
//! genuinely fatal (cannot resolve a data directory, cannot read stdin).

use thiserror::Error;

use rpm_store::StoreError;

/// Errors surfaced by the rpm-pos binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The data directory could not be determined.
    #[error("could not determine a data directory; pass --data-dir or set RPM_DATA_DIR")]
    NoDataDir,

    /// The store failed to open at startup.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
