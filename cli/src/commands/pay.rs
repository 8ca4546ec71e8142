//! # hotelrs Pay Command
//!
//! File: cli/src/commands/pay.rs
//!
//! `hotelrs pay <ID>` records payment for a reservation. No payment gateway is
//! involved; the reservation's paid flag is set and the snapshot saved. Paying
//! an already-paid reservation succeeds again without changing anything.
//!
use super::session::Session;
use crate::booking::engine;
use crate::core::error::{HotelError, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Pay for a reservation (simulated)")]
pub struct PayArgs {
    /// Reservation id to pay for.
    reservation_id: String,
}

pub fn handle_pay(args: PayArgs, session: &mut Session) -> Result<()> {
    info!("Handling pay command (id: {})", args.reservation_id);
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &PayArgs, session: &mut Session, out: &mut W) -> Result<()> {
    let id = args.reservation_id.trim();
    if !engine::pay(&mut session.hotel, id) {
        return Err(HotelError::ReservationNotFound { id: id.to_string() }.into());
    }
    session.save()?;
    writeln!(out, "Payment successful (simulated).")?;
    Ok(())
}
