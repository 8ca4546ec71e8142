//! # hotelrs Book Command
//!
//! File: cli/src/commands/book.rs
//!
//! ## Overview
//!
//! `hotelrs book` reserves one room for a guest over `[--from, --to)` and saves
//! the snapshot. The amount is fixed at booking time: nights × nightly price.
//! With `--pay-now` the reservation is recorded as already paid.
//!
//! ```bash
//! hotelrs book --guest Alice --room 101 --from 2024-01-01 --to 2024-01-03 --pay-now
//! ```
//!
//! Output on success:
//!
//! ```text
//! Booked: Reservation R000001-9f1c | Guest: Alice | Room: 101 | 2024-01-01 -> 2024-01-03 | Amount: 6000.00 | Paid: YES
//! ```
//!
use super::{ensure_valid_range, session::Session};
use crate::booking::engine;
use crate::core::error::{HotelError, Result};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Book a room")]
pub struct BookArgs {
    /// Name the reservation is held under.
    #[arg(long, short)]
    guest: String,

    /// Id of the room to book.
    #[arg(long, short)]
    room: u32,

    /// Check-in date (YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Check-out date (YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// Record the reservation as paid immediately.
    #[arg(long)]
    pay_now: bool,
}

pub fn handle_book(args: BookArgs, session: &mut Session) -> Result<()> {
    info!(
        "Handling book command (guest: {}, room: {}, {} -> {})",
        args.guest, args.room, args.from, args.to
    );
    run(&args, session, &mut io::stdout().lock())
}

fn run<W: Write>(args: &BookArgs, session: &mut Session, out: &mut W) -> Result<()> {
    if args.guest.trim().is_empty() {
        return Err(HotelError::ArgumentParsing("Guest name cannot be empty.".into()).into());
    }
    ensure_valid_range(args.from, args.to)?;

    let reservation = engine::book(
        &mut session.hotel,
        &args.guest,
        args.room,
        args.from,
        args.to,
        args.pay_now,
    )?;
    session
        .save()
        .context("Reservation was created but could not be saved")?;
    writeln!(out, "Booked: {}", reservation)?;
    Ok(())
}
