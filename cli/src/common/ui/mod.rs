//! # hotelrs Report Output (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Text reports shared by the one-shot subcommands and the interactive menu.
//! Every function writes to a caller-supplied `Write`, so the menu can be
//! driven against an in-memory buffer in tests while subcommands write to
//! stdout.
//!
//! Room lines look like `  Room 101 - STANDARD - 3000.00 per night`,
//! reservation lines like
//! `  Reservation R000001-9f1c | Guest: Alice | Room: 101 | 2024-01-01 -> 2024-01-03 | Amount: 6000.00 | Paid: NO`.
//!
use crate::booking::model::{Reservation, Room};
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Writes one indented line per room, or `empty_message` if there are none.
pub fn write_rooms<'a, W: Write>(
    out: &mut W,
    rooms: impl IntoIterator<Item = &'a Room>,
    empty_message: &str,
) -> io::Result<usize> {
    write_lines(out, rooms, empty_message)
}

/// Writes one indented line per reservation, or `empty_message` if there are none.
pub fn write_reservations<'a, W: Write>(
    out: &mut W,
    reservations: impl IntoIterator<Item = &'a Reservation>,
    empty_message: &str,
) -> io::Result<usize> {
    write_lines(out, reservations, empty_message)
}

fn write_lines<W: Write, T: std::fmt::Display>(
    out: &mut W,
    items: impl IntoIterator<Item = T>,
    empty_message: &str,
) -> io::Result<usize> {
    let mut count = 0;
    for item in items {
        writeln!(out, "{}{}", INDENT, item)?;
        count += 1;
    }
    if count == 0 {
        writeln!(out, "{}", empty_message)?;
    }
    Ok(count)
}
