//! # Booking Engine
//!
//! File: cli/src/booking/engine.rs
//!
//! ## Overview
//!
//! The operations a front desk performs against a `Hotel`: search for free
//! rooms, check one room's availability, book, cancel and pay. Every function
//! takes the hotel explicitly and runs to completion against memory; saving
//! the result is the caller's job.
//!
//! Stays are half-open date ranges `[from, to)`. A guest checking out on a
//! given day and another checking in that same day do not conflict.
//!
//! ## Failure reporting
//!
//! - `book` returns `HotelError::RoomNotFound`, `HotelError::Unavailable`, or
//!   `HotelError::InvalidRange` when the stay cannot be represented.
//!   `HotelError::Storage` is returned if the id sequence is exhausted.
//! - `is_available`, `cancel` and `pay` answer with a plain `bool`; an unknown
//!   room or reservation id is simply `false`.
//!
use super::model::{Category, Reservation, Room};
use super::Hotel;
use crate::core::error::HotelError;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Rooms with no reservation overlapping `[from, to)`, optionally limited to
/// one category, in ascending room id order.
pub fn search(
    hotel: &Hotel,
    category: Option<Category>,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<&Room> {
    let available: Vec<&Room> = hotel
        .catalog
        .filtered(category)
        .filter(|room| is_available(hotel, room.id(), from, to))
        .collect();
    debug!(
        "Search {:?} {}..{} matched {} room(s)",
        category,
        from,
        to,
        available.len()
    );
    available
}

/// True iff `room_id` exists and none of its reservations overlap `[from, to)`.
pub fn is_available(hotel: &Hotel, room_id: u32, from: NaiveDate, to: NaiveDate) -> bool {
    if !hotel.catalog.contains(room_id) {
        return false;
    }
    !hotel
        .ledger
        .for_room(room_id)
        .any(|existing| existing.overlaps(from, to))
}

/// Books `room_id` for `guest_name` over `[from, to)`.
///
/// A stay shorter than one night is stretched to one night: the stored
/// check-out becomes the day after check-in and the guest pays one night.
/// The amount is `nights * price_per_night` and never changes afterwards.
pub fn book(
    hotel: &mut Hotel,
    guest_name: &str,
    room_id: u32,
    from: NaiveDate,
    to: NaiveDate,
    pay_now: bool,
) -> Result<Reservation, HotelError> {
    let price_per_night = hotel
        .catalog
        .get(room_id)
        .map(Room::price_per_night)
        .ok_or(HotelError::RoomNotFound { id: room_id })?;

    let to = if to > from {
        to
    } else {
        from.succ_opt()
            .ok_or(HotelError::InvalidRange { from, to })?
    };

    if !is_available(hotel, room_id, from, to) {
        return Err(HotelError::Unavailable { room_id, from, to });
    }

    let nights = (to - from).num_days().max(1);
    let total_amount = nights as f64 * price_per_night;

    let mut id = hotel.ids.next_id()?;
    while hotel.ledger.contains(&id) {
        id = hotel.ids.next_id()?;
    }

    let reservation = Reservation::restore(
        id,
        guest_name.trim().to_string(),
        room_id,
        from,
        to,
        total_amount,
        pay_now,
    );
    hotel.ledger.insert(reservation.clone());
    info!(
        "Booked {} for '{}' in room {} ({} night(s), {:.2})",
        reservation.id(),
        reservation.guest_name(),
        room_id,
        nights,
        total_amount
    );
    Ok(reservation)
}

/// Removes a reservation. Returns whether it existed.
pub fn cancel(hotel: &mut Hotel, reservation_id: &str) -> bool {
    let removed = hotel.ledger.remove(reservation_id).is_some();
    if removed {
        info!("Cancelled reservation {}", reservation_id);
    } else {
        debug!("Cancel requested for unknown reservation {}", reservation_id);
    }
    removed
}

/// Marks a reservation as paid. Paying twice is harmless; unknown ids return false.
pub fn pay(hotel: &mut Hotel, reservation_id: &str) -> bool {
    match hotel.ledger.get_mut(reservation_id) {
        Some(reservation) => {
            if !reservation.is_paid() {
                reservation.mark_paid();
                info!("Recorded payment for reservation {}", reservation_id);
            }
            true
        }
        None => false,
    }
}

/// Every room, ascending by id.
pub fn rooms(hotel: &Hotel) -> Vec<&Room> {
    hotel.catalog.iter().collect()
}

pub fn reservation<'a>(hotel: &'a Hotel, reservation_id: &str) -> Option<&'a Reservation> {
    hotel.ledger.get(reservation_id)
}

/// Reservations held under `guest_name`, compared case-insensitively, ordered by check-in.
pub fn reservations_for_guest<'a>(hotel: &'a Hotel, guest_name: &str) -> Vec<&'a Reservation> {
    let wanted = guest_name.trim().to_lowercase();
    let mut found: Vec<&Reservation> = hotel
        .ledger
        .iter()
        .filter(|r| r.guest_name().to_lowercase() == wanted)
        .collect();
    found.sort_by(|a, b| a.check_in().cmp(&b.check_in()).then(a.id().cmp(b.id())));
    found
}

/// Reservations for one room, ordered by check-in.
pub fn reservations_for_room(hotel: &Hotel, room_id: u32) -> Vec<&Reservation> {
    let mut found: Vec<&Reservation> = hotel.ledger.for_room(room_id).collect();
    found.sort_by_key(|r| r.check_in());
    found
}
