//! # hotelrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout hotelrs. Expected
//! booking failures (an unknown room, an occupied room) are reported as
//! `HotelError` values rather than panics, and the application layer wraps
//! them in `anyhow::Error` so I/O failures can carry context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HotelError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Booking failures (unknown room or reservation, overlapping stays, bad ranges)
//! - Configuration errors
//! - Snapshot storage errors
//! - Command-line input errors
//!
//! ## Examples
//!
//! ```rust
//! // Engine operations return the domain error directly.
//! match engine::book(&mut hotel, "Alice", 101, from, to, false) {
//!     Ok(reservation) => println!("Booked: {}", reservation),
//!     Err(HotelError::Unavailable { .. }) => println!("Pick other dates."),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // Application code adds context using anyhow.
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
//! ```
//!
use chrono::NaiveDate;
use thiserror::Error;

/// Custom error type for the hotelrs application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotelError {
    #[error("Room {id} not found.")]
    RoomNotFound { id: u32 },

    #[error("Reservation '{id}' not found.")]
    ReservationNotFound { id: String },

    #[error("Room {room_id} is not available from {from} to {to}.")]
    Unavailable {
        room_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    },

    #[error("Invalid date range: check-out {to} must be after check-in {from}.")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
