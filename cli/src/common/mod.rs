//! # hotelrs Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Helpers shared across command handlers that are not part of the booking
//! domain itself.
//!
//! ```rust
//! use crate::common::{fs::io, ui};
//!
//! io::write_string_atomically(path, &content)?;
//! ui::write_rooms(&mut stdout, rooms, "No rooms available.")?;
//! ```
//!

/// Utilities for filesystem operations (reads with context, atomic writes).
pub mod fs;
/// Text report output for rooms and reservations.
pub mod ui;
