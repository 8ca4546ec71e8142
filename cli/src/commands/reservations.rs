//! # hotelrs Reservations Command
//!
//! File: cli/src/commands/reservations.rs
//!
//! `hotelrs reservations --guest <NAME>` lists the reservations held under a
//! guest name. Names are matched case-insensitively.
//!
use super::session::Session;
use crate::booking::engine;
use crate::common::ui;
use crate::core::error::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "View a guest's reservations")]
pub struct ReservationsArgs {
    /// Guest name to look up.
    #[arg(long, short)]
    guest: String,
}

pub fn handle_reservations(args: ReservationsArgs, session: &mut Session) -> Result<()> {
    info!("Handling reservations command (guest: {})", args.guest);
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &ReservationsArgs, session: &Session, out: &mut W) -> Result<()> {
    let found = engine::reservations_for_guest(&session.hotel, &args.guest);
    ui::write_reservations(
        out,
        found,
        &format!("No reservations found for {}", args.guest.trim()),
    )?;
    Ok(())
}
