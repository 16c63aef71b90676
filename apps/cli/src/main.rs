//! # rpm-pos
//!
//! Entry point for the Restaurant Profit Manager shell.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr             │
//! │     • Default: WARN (quiet prompt), override with RUST_LOG              │
//! │                                                                         │
//! │  2. Resolve Data Directory ───────────────────────────────────────────► │
//! │     • --data-dir flag, then RPM_DATA_DIR, then the platform dir:        │
//! │       macOS:   ~/Library/Application Support/com.rpm.pos/               │
//! │       Windows: %APPDATA%\rpm\pos\data\                                  │
//! │       Linux:   ~/.local/share/rpm-pos/                                  │
//! │                                                                         │
//! │  3. Open the JSON File Store ─────────────────────────────────────────► │
//! │     • One <key>.json per collection, created on first save              │
//! │                                                                         │
//! │  4. Open the Session ─────────────────────────────────────────────────► │
//! │     • Loads menu/orders/expenses fail-open; cart starts empty           │
//! │                                                                         │
//! │  5. Run the Shell ────────────────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod error;
mod session;
mod shell;

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::CliError;
use rpm_store::JsonFileStore;
use session::Session;

/// Track a restaurant's daily orders, costs, and expenses from the terminal.
#[derive(Debug, Parser)]
#[command(name = "rpm-pos", version, about)]
struct Args {
    /// Directory holding the persisted JSON collections
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let data_dir = resolve_data_dir(args.data_dir)?;
    info!(data_dir = %data_dir.display(), "starting rpm-pos");

    let store = JsonFileStore::open(&data_dir)?;
    let mut session = Session::open(Box::new(store));
    shell::run(&mut session)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rpm=trace` - Trace the rpm crates only
/// - Default: WARN, so the prompt stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the data directory.
///
/// Precedence: `--data-dir` flag, then the `RPM_DATA_DIR` environment
/// variable, then the platform app-data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("RPM_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = ProjectDirs::from("com", "rpm", "pos").ok_or(CliError::NoDataDir)?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
