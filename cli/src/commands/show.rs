//! # hotelrs Show Command
//!
//! File: cli/src/commands/show.rs
//!
//! `hotelrs show <ID>` prints one reservation together with the room it is for.
//!
use super::session::Session;
use crate::booking::engine;
use crate::core::error::{HotelError, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Show one reservation's details")]
pub struct ShowArgs {
    /// Reservation id to display.
    reservation_id: String,
}

pub fn handle_show(args: ShowArgs, session: &mut Session) -> Result<()> {
    info!("Handling show command (id: {})", args.reservation_id);
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &ShowArgs, session: &Session, out: &mut W) -> Result<()> {
    let id = args.reservation_id.trim();
    let reservation = engine::reservation(&session.hotel, id)
        .ok_or_else(|| HotelError::ReservationNotFound { id: id.to_string() })?;
    writeln!(out, "{}", reservation)?;
    if let Some(room) = session.hotel.catalog().get(reservation.room_id()) {
        writeln!(out, "  {} | {} night(s)", room, reservation.nights())?;
    }
    Ok(())
}
