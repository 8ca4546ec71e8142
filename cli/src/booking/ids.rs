//! # Reservation Identifiers
//!
//! File: cli/src/booking/ids.rs
//!
//! ## Overview
//!
//! Reservation ids look like `R000042-9f1c`: a monotonic sequence number
//! followed by a random 16-bit hex suffix. The sequence alone keeps ids from
//! one hotel unique; the suffix keeps ids opaque so guests cannot guess each
//! other's reservation numbers. The next sequence number is stored in the
//! snapshot file so numbering continues across runs.
//!
use crate::core::error::HotelError;
use rand::Rng;

const PREFIX: char = 'R';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationIdGenerator {
    next_sequence: u64,
}

impl Default for ReservationIdGenerator {
    fn default() -> Self {
        Self { next_sequence: 1 }
    }
}

impl ReservationIdGenerator {
    pub fn starting_at(next_sequence: u64) -> Self {
        Self {
            next_sequence: next_sequence.max(1),
        }
    }

    /// Sequence number the next generated id will carry.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Hands out the next id. Fails only once the sequence space is used up.
    pub fn next_id(&mut self) -> Result<String, HotelError> {
        let sequence = self.next_sequence;
        self.next_sequence = successor(sequence)?;
        let suffix: u16 = rand::thread_rng().gen();
        Ok(format!("{}{:06}-{:04x}", PREFIX, sequence, suffix))
    }

    /// Moves the counter past the sequence number embedded in `id`, if any.
    ///
    /// Ids that don't follow the `R<seq>-<suffix>` shape are ignored. An id
    /// carrying the largest possible sequence leaves nothing to hand out and
    /// is rejected.
    pub fn observe(&mut self, id: &str) -> Result<(), HotelError> {
        if let Some(sequence) = sequence_of(id) {
            if sequence >= self.next_sequence {
                self.next_sequence = successor(sequence)?;
            }
        }
        Ok(())
    }
}

fn successor(sequence: u64) -> Result<u64, HotelError> {
    sequence.checked_add(1).ok_or_else(|| {
        HotelError::Storage(format!(
            "Reservation sequence {} is exhausted; no further ids can be issued.",
            sequence
        ))
    })
}

/// Extracts the sequence number from an id produced by `next_id`.
pub fn sequence_of(id: &str) -> Option<u64> {
    let rest = id.strip_prefix(PREFIX)?;
    let (sequence, _suffix) = rest.split_once('-')?;
    sequence.parse().ok()
}
