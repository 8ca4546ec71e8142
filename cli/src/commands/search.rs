//! # hotelrs Search Command
//!
//! File: cli/src/commands/search.rs
//!
//! `hotelrs search` prints the rooms that are free for every night in
//! `[--from, --to)`, optionally restricted to one category.
//!
//! ```bash
//! hotelrs search --from 2024-01-01 --to 2024-01-03
//! hotelrs search --category suite --from 2024-01-01 --to 2024-01-03
//! ```
//!
use super::{ensure_valid_range, session::Session};
use crate::booking::{engine, model::Category};
use crate::common::ui;
use crate::core::error::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Search available rooms")]
pub struct SearchArgs {
    /// Room category: standard, deluxe, suite or all.
    #[arg(long, short, default_value = "all")]
    category: String,

    /// Check-in date (YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Check-out date (YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,
}

pub fn handle_search(args: SearchArgs, session: &mut Session) -> Result<()> {
    info!(
        "Handling search command (category: {}, {} -> {})",
        args.category, args.from, args.to
    );
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &SearchArgs, session: &Session, out: &mut W) -> Result<()> {
    let category = Category::parse_filter(&args.category)?;
    ensure_valid_range(args.from, args.to)?;
    let available = engine::search(&session.hotel, category, args.from, args.to);
    ui::write_rooms(out, available, "No rooms available.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, seeded_session};

    fn args(argv: &[&str]) -> SearchArgs {
        let mut full = vec!["search"];
        full.extend_from_slice(argv);
        SearchArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_booked_room_is_excluded() {
        let (_dir, mut session) = seeded_session();
        let from = "2024-01-01".parse().unwrap();
        let to = "2024-01-03".parse().unwrap();
        engine::book(&mut session.hotel, "Alice", 108, from, to, false).unwrap();

        let mut out = Vec::new();
        run(
            &args(&["--category", "SUITE", "--from", "2024-01-02", "--to", "2024-01-04"]),
            &session,
            &mut out,
        )
        .unwrap();
        assert_eq!(output(out), "  Room 109 - SUITE - 9500.00 per night\n");
    }

    #[test]
    fn test_reports_when_nothing_is_free() {
        let (_dir, mut session) = seeded_session();
        let from = "2024-01-01".parse().unwrap();
        let to = "2024-01-05".parse().unwrap();
        engine::book(&mut session.hotel, "A", 108, from, to, false).unwrap();
        engine::book(&mut session.hotel, "B", 109, from, to, false).unwrap();

        let mut out = Vec::new();
        run(
            &args(&["-c", "suite", "--from", "2024-01-02", "--to", "2024-01-03"]),
            &session,
            &mut out,
        )
        .unwrap();
        assert_eq!(output(out), "No rooms available.\n");
    }

    #[test]
    fn test_rejects_bad_input() {
        let (_dir, session) = seeded_session();
        let mut out = Vec::new();
        let err = run(
            &args(&["--from", "2024-01-03", "--to", "2024-01-01"]),
            &session,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid date range"));

        let err = run(
            &args(&["-c", "penthouse", "--from", "2024-01-01", "--to", "2024-01-02"]),
            &session,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown room category"));

        assert!(SearchArgs::try_parse_from(["search", "--from", "01/02/2024", "--to", "2024-01-03"]).is_err());
    }
}
