//! # hotelrs Cancel Command
//!
//! File: cli/src/commands/cancel.rs
//!
//! `hotelrs cancel <ID>` removes a reservation and saves the snapshot. An
//! unknown id is reported as an error and nothing is written.
//!
use super::session::Session;
use crate::booking::engine;
use crate::core::error::{HotelError, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Cancel a reservation")]
pub struct CancelArgs {
    /// Reservation id, as printed when the room was booked.
    reservation_id: String,
}

pub fn handle_cancel(args: CancelArgs, session: &mut Session) -> Result<()> {
    info!("Handling cancel command (id: {})", args.reservation_id);
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &CancelArgs, session: &mut Session, out: &mut W) -> Result<()> {
    let id = args.reservation_id.trim();
    if !engine::cancel(&mut session.hotel, id) {
        return Err(HotelError::ReservationNotFound { id: id.to_string() }.into());
    }
    session.save()?;
    writeln!(out, "Cancelled.")?;
    Ok(())
}
