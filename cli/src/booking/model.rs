//! # Booking Domain Types
//!
//! File: cli/src/booking/model.rs
//!
//! ## Overview
//!
//! Rooms, room categories and reservations. Rooms never change once created.
//! A reservation's amount is fixed when it is booked; the paid flag is the only
//! field that changes afterwards, and only the engine can change it.
//!
use crate::core::error::HotelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room category offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Standard,
    Deluxe,
    Suite,
}

impl Category {
    /// Parses a category filter as typed by a user.
    ///
    /// `all` and the empty string mean "no filter" and yield `None`.
    pub fn parse_filter(input: &str) -> Result<Option<Category>, HotelError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Standard => "STANDARD",
            Category::Deluxe => "DELUXE",
            Category::Suite => "SUITE",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Category::Standard),
            "deluxe" => Ok(Category::Deluxe),
            "suite" => Ok(Category::Suite),
            other => Err(HotelError::ArgumentParsing(format!(
                "Unknown room category '{}'. Expected STANDARD, DELUXE or SUITE.",
                other
            ))),
        }
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: u32,
    category: Category,
    price_per_night: f64,
}

impl Room {
    /// Creates a room, rejecting a zero id or a price that is not a positive number.
    pub fn new(id: u32, category: Category, price_per_night: f64) -> Result<Self, HotelError> {
        if id == 0 {
            return Err(HotelError::Config("Room id must be a positive integer.".into()));
        }
        if !price_per_night.is_finite() || price_per_night <= 0.0 {
            return Err(HotelError::Config(format!(
                "Room {} must have a positive nightly price (got {}).",
                id, price_per_night
            )));
        }
        Ok(Self {
            id,
            category,
            price_per_night,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} - {} - {:.2} per night",
            self.id, self.category, self.price_per_night
        )
    }
}

/// A guest's booking of one room for a half-open range of nights `[check_in, check_out)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: String,
    guest_name: String,
    room_id: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_amount: f64,
    paid: bool,
}

impl Reservation {
    /// Rebuilds a reservation from stored fields. Used by the engine and the snapshot store.
    pub(crate) fn restore(
        id: String,
        guest_name: String,
        room_id: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_amount: f64,
        paid: bool,
    ) -> Self {
        Self {
            id,
            guest_name,
            room_id,
            check_in,
            check_out,
            total_amount,
            paid,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room_id(&self) -> u32 {
        self.room_id
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub(crate) fn mark_paid(&mut self) {
        self.paid = true;
    }

    /// True when this stay shares at least one night with `[from, to)`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        ranges_overlap(from, to, self.check_in, self.check_out)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {} | Guest: {} | Room: {} | {} -> {} | Amount: {:.2} | Paid: {}",
            self.id,
            self.guest_name,
            self.room_id,
            self.check_in.format("%Y-%m-%d"),
            self.check_out.format("%Y-%m-%d"),
            self.total_amount,
            if self.paid { "YES" } else { "NO" }
        )
    }
}

/// Half-open interval overlap: `[a1, a2)` and `[b1, b2)` overlap iff `a1 < b2 && b1 < a2`.
pub fn ranges_overlap(a1: NaiveDate, a2: NaiveDate, b1: NaiveDate, b2: NaiveDate) -> bool {
    a1 < b2 && b1 < a2
}
