//! # Reservation Ledger
//!
//! File: cli/src/booking/ledger.rs
//!
//! Mapping of reservation id to reservation record.
//!
use super::model::Reservation;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationLedger {
    entries: BTreeMap<String, Reservation>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reservation, returning any record previously stored under the same id.
    pub fn insert(&mut self, reservation: Reservation) -> Option<Reservation> {
        self.entries
            .insert(reservation.id().to_string(), reservation)
    }

    pub fn remove(&mut self, id: &str) -> Option<Reservation> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Reservation> {
        self.entries.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.entries.values()
    }

    pub fn for_room(&self, room_id: u32) -> impl Iterator<Item = &Reservation> {
        self.entries.values().filter(move |r| r.room_id() == room_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
