//! # hotelrs Rooms Command
//!
//! File: cli/src/commands/rooms.rs
//!
//! `hotelrs rooms` lists every room in the catalog. With `--bookings`, each
//! room is followed by its reservations in check-in order.
//!
//! ```bash
//! hotelrs rooms
//! hotelrs rooms --bookings
//! ```
//!
use super::session::Session;
use crate::booking::engine;
use crate::common::ui;
use crate::core::error::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

const NO_ROOMS: &str = "The hotel has no rooms.";

#[derive(Parser, Debug)]
#[command(about = "Show all rooms")]
pub struct RoomsArgs {
    /// Also list the reservations held on each room.
    #[arg(long, short)]
    bookings: bool,
}

pub fn handle_rooms(args: RoomsArgs, session: &mut Session) -> Result<()> {
    info!("Handling rooms command (bookings: {})", args.bookings);
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &RoomsArgs, session: &Session, out: &mut W) -> Result<()> {
    let rooms = engine::rooms(&session.hotel);
    if !args.bookings || rooms.is_empty() {
        ui::write_rooms(out, rooms, NO_ROOMS)?;
        return Ok(());
    }
    for room in rooms {
        writeln!(out, "  {}", room)?;
        for reservation in engine::reservations_for_room(&session.hotel, room.id()) {
            writeln!(out, "      {}", reservation)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Hotel;
    use crate::commands::test_support::{output, seeded_session};

    #[test]
    fn test_lists_seeded_rooms_in_order() {
        let (_dir, session) = seeded_session();
        let mut out = Vec::new();
        run(&RoomsArgs { bookings: false }, &session, &mut out).unwrap();
        let text = output(out);
        assert_eq!(text.lines().count(), 9);
        assert!(text.starts_with("  Room 101 - STANDARD - 3000.00 per night\n"));
        assert!(text.ends_with("  Room 109 - SUITE - 9500.00 per night\n"));
    }

    #[test]
    fn test_bookings_are_listed_under_their_room() {
        let (_dir, mut session) = seeded_session();
        let from = "2024-01-01".parse().unwrap();
        let to = "2024-01-03".parse().unwrap();
        let r = engine::book(&mut session.hotel, "Alice", 102, from, to, false).unwrap();

        let mut out = Vec::new();
        run(&RoomsArgs { bookings: true }, &session, &mut out).unwrap();
        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("  Room 102"));
        assert!(lines[2].contains(r.id()));
        assert!(lines[3].starts_with("  Room 103"));
    }

    #[test]
    fn test_empty_catalog_message_with_and_without_bookings() {
        let (_dir, mut session) = seeded_session();
        session.hotel = Hotel::default();
        for bookings in [false, true] {
            let mut out = Vec::new();
            run(&RoomsArgs { bookings }, &session, &mut out).unwrap();
            assert_eq!(output(out), "The hotel has no rooms.\n");
        }
    }

    #[test]
    fn test_parses_flags() {
        let args = RoomsArgs::try_parse_from(["rooms", "--bookings"]).unwrap();
        assert!(args.bookings);
    }
}
