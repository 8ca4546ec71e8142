//! # hotelrs Booking Domain
//!
//! File: cli/src/booking/mod.rs
//!
//! ## Overview
//!
//! The booking domain: the room catalog, the reservation ledger, reservation
//! id generation and the booking engine operations that tie them together.
//!
//! ## Architecture
//!
//! - `model`: `Room`, `Category`, `Reservation` and the date overlap rule
//! - `catalog`: `RoomCatalog`, the fixed set of rooms
//! - `ledger`: `ReservationLedger`, reservation id → reservation
//! - `ids`: `ReservationIdGenerator`, monotonic ids with a random suffix
//! - `engine`: search, availability, book, cancel and pay
//!
//! All state lives in a `Hotel` value owned by the caller. The command layer
//! builds one at startup (from a snapshot or the seed catalog), passes it to
//! every engine operation, and saves it afterwards. Nothing here is global.
//!
pub mod catalog;
pub mod engine;
pub mod ids;
pub mod ledger;
pub mod model;

use crate::core::error::HotelError;
use catalog::RoomCatalog;
use ids::ReservationIdGenerator;
use ledger::ReservationLedger;

/// Complete in-memory state of one hotel: catalog, ledger and id sequence.
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    catalog: RoomCatalog,
    ledger: ReservationLedger,
    ids: ReservationIdGenerator,
}

impl Hotel {
    /// A hotel with the given rooms and no reservations.
    pub fn new(catalog: RoomCatalog) -> Self {
        Self {
            catalog,
            ledger: ReservationLedger::new(),
            ids: ReservationIdGenerator::default(),
        }
    }

    /// Reassembles a hotel from stored parts. The id counter is moved past
    /// every id already in the ledger.
    pub fn from_parts(
        catalog: RoomCatalog,
        ledger: ReservationLedger,
        mut ids: ReservationIdGenerator,
    ) -> Result<Self, HotelError> {
        for reservation in ledger.iter() {
            ids.observe(reservation.id())?;
        }
        Ok(Self {
            catalog,
            ledger,
            ids,
        })
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub fn ids(&self) -> &ReservationIdGenerator {
        &self.ids
    }
}
