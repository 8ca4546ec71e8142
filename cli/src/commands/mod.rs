//! # hotelrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per `hotelrs` subcommand, plus the `session` that owns the hotel
//! state while a command runs. `main.rs` opens the session, hands it to the
//! matching handler and reports any error.
//!
//! ## Commands
//!
//! - `rooms`: list the catalog (optionally with each room's bookings)
//! - `search`: rooms free for a date range, optionally by category
//! - `book`: reserve a room for a guest
//! - `cancel`: drop a reservation
//! - `pay`: mark a reservation as paid (simulated payment)
//! - `reservations`: a guest's reservations
//! - `show`: one reservation's details
//! - `menu`: interactive session covering all of the above plus save/load
//!
//! Handlers that change the ledger (`book`, `cancel`, `pay`) save the snapshot
//! before returning. Each handler writes its report through a `Write` so the
//! output can be checked in unit tests.
//!
use crate::core::error::HotelError;
use chrono::NaiveDate;

pub mod book;
pub mod cancel;
pub mod menu;
pub mod pay;
pub mod reservations;
pub mod rooms;
pub mod search;
pub mod session;
pub mod show;

/// Rejects a stay whose check-out is not after its check-in.
pub(crate) fn ensure_valid_range(from: NaiveDate, to: NaiveDate) -> Result<(), HotelError> {
    if to <= from {
        return Err(HotelError::InvalidRange { from, to });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_valid_range() {
        let d = |s: &str| s.parse::<NaiveDate>().unwrap();
        assert!(ensure_valid_range(d("2024-01-01"), d("2024-01-02")).is_ok());
        assert!(matches!(
            ensure_valid_range(d("2024-01-02"), d("2024-01-02")),
            Err(HotelError::InvalidRange { .. })
        ));
        assert!(ensure_valid_range(d("2024-01-03"), d("2024-01-02")).is_err());
    }
}
