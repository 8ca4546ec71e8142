//! # hotelrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the hotelrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Opening the hotel session (load the snapshot or seed a new hotel)
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each subcommand (`rooms`, `search`, `book`, ...) is a variant in the `Commands` enum
//! - Handlers live in `commands/` and receive the open `Session`
//! - The booking engine (`booking/`) never touches the filesystem; `store/` does
//! - All errors are propagated to this level for consistent reporting
//!
//! ## Examples
//!
//! ```bash
//! # Show the catalog
//! hotelrs rooms
//!
//! # Book with a specific data file and verbose logging
//! hotelrs -v --data-file ./hotel.toml book --guest Alice --room 101 --from 2024-01-01 --to 2024-01-03
//!
//! # Interactive front-desk menu
//! hotelrs menu
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod booking; // Room catalog, reservation ledger and booking engine
mod commands; // Subcommand handlers and the session they share
mod common; // Shared utilities (filesystem, report output)
mod core; // Core infrastructure (errors, config)
mod store; // Snapshot load/save and the seed catalog

use crate::commands::session::Session;
use crate::core::error::Result;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "hotelrs",
    about = "Hotel reservations: search, book, cancel and pay for rooms",
    long_about = "Manage a small hotel's rooms and reservations from the command line.\n\
                  State is kept in a TOML snapshot file (see --data-file).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Snapshot file to load and save (overrides storage.data_file from config).
    #[arg(long, global = true, env = "HOTELRS_DATA_FILE", value_name = "PATH")]
    data_file: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    Rooms(commands::rooms::RoomsArgs),
    #[command(alias = "s")]
    Search(commands::search::SearchArgs),
    #[command(alias = "b")]
    Book(commands::book::BookArgs),
    Cancel(commands::cancel::CancelArgs),
    Pay(commands::pay::PayArgs),
    #[command(alias = "r")]
    Reservations(commands::reservations::ReservationsArgs),
    Show(commands::show::ShowArgs),
    Menu(commands::menu::MenuArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut session = Session::open(cli.data_file)?;
    match cli.command {
        Commands::Rooms(args) => commands::rooms::handle_rooms(args, &mut session),
        Commands::Search(args) => commands::search::handle_search(args, &mut session),
        Commands::Book(args) => commands::book::handle_book(args, &mut session),
        Commands::Cancel(args) => commands::cancel::handle_cancel(args, &mut session),
        Commands::Pay(args) => commands::pay::handle_pay(args, &mut session),
        Commands::Reservations(args) => {
            commands::reservations::handle_reservations(args, &mut session)
        }
        Commands::Show(args) => commands::show::handle_show(args, &mut session),
        Commands::Menu(args) => commands::menu::handle_menu(args, &mut session),
    }
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn hotelrs_cmd() -> Command {
        Command::cargo_bin("hotelrs").expect("Failed to find hotelrs binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        hotelrs_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        hotelrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_global_data_file_after_subcommand() {
        let cli = Cli::try_parse_from(["hotelrs", "rooms", "--data-file", "x.toml", "-vv"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
