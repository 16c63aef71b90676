//! # Interactive Shell
//!
//! The prompt loop: one command per line, parsed with clap and dispatched
//! to the handlers.
//!
//! ## Interaction Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shell Loop                                      │
//! │                                                                         │
//! │  rpm> menu add "Chicken Burger" 7.50 3.00 --inventory 50               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  tokenize (quote-aware) ──► clap try_parse_from ──► handler            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Every command runs to completion before the next line is read, so    │
//! │  multi-component updates (place-order) are atomic with respect to     │
//! │  user interaction.                                                     │
//! │                                                                         │
//! │  Destructive resets (reset-day, clear-storage) prompt y/N first;      │
//! │  declining aborts with no state change.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{cart, expense, menu, order, report};
use crate::session::Session;

/// The grammar for one shell line.
#[derive(Debug, Parser)]
#[command(name = "rpm", no_binary_name = true, disable_version_flag = true)]
pub enum ShellCommand {
    /// Manage the menu
    #[command(subcommand)]
    Menu(menu::MenuCmd),
    /// Stage items for an order
    #[command(subcommand)]
    Cart(cart::CartCmd),
    /// Place and browse orders
    #[command(subcommand)]
    Order(order::OrderCmd),
    /// Record operating expenses
    #[command(subcommand)]
    Expense(expense::ExpenseCmd),
    /// Show revenue, COGS, gross/net profit
    Summary,
    /// Export orders as CSV
    Export {
        /// Output path (default: orders_<date>.csv in the working dir)
        path: Option<PathBuf>,
    },
    /// Load the three-item sample menu (clears orders and expenses)
    Seed,
    /// Clear today's orders and expenses, keeping the menu
    ResetDay,
    /// Wipe ALL stored data
    ClearStorage,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Runs the prompt loop until `exit` or end of input.
pub fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    println!("Restaurant Profit Manager - type `help` for commands, `exit` to leave");
    loop {
        print!("rpm> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() == 1 && tokens[0] == "help" {
            // clap renders help through its error path
            if let Err(err) = ShellCommand::try_parse_from(["--help"]) {
                println!("{err}");
            }
            continue;
        }

        match ShellCommand::try_parse_from(&tokens) {
            Ok(ShellCommand::Exit) => break,
            Ok(cmd) => dispatch(session, cmd)?,
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}

fn dispatch(session: &mut Session, cmd: ShellCommand) -> io::Result<()> {
    match cmd {
        ShellCommand::Menu(cmd) => menu::run(session, cmd),
        ShellCommand::Cart(cmd) => cart::run(session, cmd),
        ShellCommand::Order(cmd) => order::run(session, cmd),
        ShellCommand::Expense(cmd) => expense::run(session, cmd),
        ShellCommand::Summary => report::summary(session),
        ShellCommand::Export { path } => report::export(session, path),
        ShellCommand::Seed => {
            session.seed_sample();
            println!("sample menu loaded");
        }
        ShellCommand::ResetDay => {
            if confirm("Reset today's orders and expenses? This won't delete the menu.")? {
                session.reset_day();
                println!("day reset");
            } else {
                println!("aborted");
            }
        }
        ShellCommand::ClearStorage => {
            if confirm("Clear ALL stored data (menu, orders, expenses)?")? {
                session.clear_storage();
                println!("storage cleared");
            } else {
                println!("aborted");
            }
        }
        ShellCommand::Exit => {}
    }
    Ok(())
}

/// Asks a yes/no question. Anything but an explicit yes declines.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Splits a line into tokens, honoring single and double quotes so item
/// and expense names can contain spaces.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(tokenize("menu list\n"), vec!["menu", "list"]);
        assert_eq!(tokenize("   \n"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_quoted_names() {
        assert_eq!(
            tokenize("menu add \"Chicken Burger\" 7.50 3.00\n"),
            vec!["menu", "add", "Chicken Burger", "7.50", "3.00"]
        );
        assert_eq!(
            tokenize("expense add 'Cooking Gas' 45\n"),
            vec!["expense", "add", "Cooking Gas", "45"]
        );
    }

    #[test]
    fn test_tokenize_empty_quotes_make_a_token() {
        assert_eq!(tokenize("order place --note \"\"\n"), vec![
            "order",
            "place",
            "--note",
            ""
        ]);
    }

    #[test]
    fn test_shell_grammar_parses() {
        assert!(ShellCommand::try_parse_from(["menu", "list"]).is_ok());
        assert!(ShellCommand::try_parse_from([
            "menu",
            "add",
            "Chicken Burger",
            "7.50",
            "3.00",
            "--inventory",
            "50"
        ])
        .is_ok());
        assert!(ShellCommand::try_parse_from(["cart", "qty", "abc", "3"]).is_ok());
        assert!(ShellCommand::try_parse_from(["order", "place", "--note", "table 4"]).is_ok());
        assert!(ShellCommand::try_parse_from(["reset-day"]).is_ok());
        assert!(ShellCommand::try_parse_from(["clear-storage"]).is_ok());
        assert!(ShellCommand::try_parse_from(["quit"]).is_ok());
    }

    #[test]
    fn test_shell_grammar_rejects_bad_money() {
        assert!(ShellCommand::try_parse_from(["menu", "add", "X", "abc", "1.00"]).is_err());
        assert!(ShellCommand::try_parse_from(["expense", "add", "Gas", "1.005"]).is_err());
    }
}
