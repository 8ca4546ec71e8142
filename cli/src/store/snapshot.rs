//! # Snapshot Records
//!
//! File: cli/src/store/snapshot.rs
//!
//! ## Overview
//!
//! The on-disk shape of a hotel snapshot. Records here are plain data, kept
//! separate from the in-memory domain types so the file format can evolve
//! (through `version`) without touching the engine.
//!
//! ## Format (version 1)
//!
//! ```toml
//! version = 1
//! next_sequence = 3
//!
//! [[rooms]]
//! id = 101
//! category = "standard"
//! price_per_night = 3000.0
//!
//! [[reservations]]
//! id = "R000002-4be1"
//! guest_name = "Alice"
//! room_id = 101
//! check_in = "2024-01-01"
//! check_out = "2024-01-03"
//! total_amount = 6000.0
//! paid = false
//! ```
//!
use crate::booking::catalog::RoomCatalog;
use crate::booking::ids::ReservationIdGenerator;
use crate::booking::ledger::ReservationLedger;
use crate::booking::model::{Category, Reservation, Room};
use crate::booking::Hotel;
use crate::core::error::HotelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SnapshotFile {
    pub version: u32,
    #[serde(default = "default_next_sequence")]
    pub next_sequence: u64,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub reservations: Vec<ReservationRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoomRecord {
    pub id: u32,
    pub category: Category,
    pub price_per_night: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReservationRecord {
    pub id: String,
    pub guest_name: String,
    pub room_id: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: f64,
    #[serde(default)]
    pub paid: bool,
}

fn default_next_sequence() -> u64 {
    1
}

impl SnapshotFile {
    /// Captures the full state of `hotel`.
    pub fn capture(hotel: &Hotel) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            next_sequence: hotel.ids().next_sequence(),
            rooms: hotel
                .catalog()
                .iter()
                .map(|room| RoomRecord {
                    id: room.id(),
                    category: room.category(),
                    price_per_night: room.price_per_night(),
                })
                .collect(),
            reservations: hotel
                .ledger()
                .iter()
                .map(|r| ReservationRecord {
                    id: r.id().to_string(),
                    guest_name: r.guest_name().to_string(),
                    room_id: r.room_id(),
                    check_in: r.check_in(),
                    check_out: r.check_out(),
                    total_amount: r.total_amount(),
                    paid: r.is_paid(),
                })
                .collect(),
        }
    }

    /// Rebuilds a `Hotel`, checking the version and the references between records.
    pub fn into_hotel(self) -> Result<Hotel, HotelError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(HotelError::Storage(format!(
                "Unsupported snapshot version {} (expected {}).",
                self.version, SNAPSHOT_VERSION
            )));
        }

        let rooms = self
            .rooms
            .into_iter()
            .map(|r| Room::new(r.id, r.category, r.price_per_night))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HotelError::Storage(e.to_string()))?;
        let catalog = RoomCatalog::new(rooms).map_err(|e| HotelError::Storage(e.to_string()))?;

        let mut ledger = ReservationLedger::new();
        for record in self.reservations {
            if !catalog.contains(record.room_id) {
                return Err(HotelError::Storage(format!(
                    "Reservation '{}' refers to unknown room {}.",
                    record.id, record.room_id
                )));
            }
            if record.check_out <= record.check_in {
                return Err(HotelError::Storage(format!(
                    "Reservation '{}' checks out ({}) before it checks in ({}).",
                    record.id, record.check_out, record.check_in
                )));
            }
            if !record.total_amount.is_finite() || record.total_amount <= 0.0 {
                return Err(HotelError::Storage(format!(
                    "Reservation '{}' has an invalid total amount ({}).",
                    record.id, record.total_amount
                )));
            }
            if let Some(clash) = ledger
                .for_room(record.room_id)
                .find(|r| r.overlaps(record.check_in, record.check_out))
            {
                return Err(HotelError::Storage(format!(
                    "Reservation '{}' overlaps reservation '{}' on room {}.",
                    record.id,
                    clash.id(),
                    record.room_id
                )));
            }
            let id = record.id.clone();
            let reservation = Reservation::restore(
                record.id,
                record.guest_name,
                record.room_id,
                record.check_in,
                record.check_out,
                record.total_amount,
                record.paid,
            );
            if ledger.insert(reservation).is_some() {
                return Err(HotelError::Storage(format!(
                    "Reservation '{}' appears more than once.",
                    id
                )));
            }
        }

        Hotel::from_parts(
            catalog,
            ledger,
            ReservationIdGenerator::starting_at(self.next_sequence),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_content: &str) -> Result<Hotel, HotelError> {
        let file: SnapshotFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        file.into_hotel()
    }

    #[test]
    fn test_reads_version_one_document() {
        let hotel = parse(
            r#"
            version = 1
            next_sequence = 2

            [[rooms]]
            id = 101
            category = "standard"
            price_per_night = 3000.0

            [[reservations]]
            id = "R000001-0a0b"
            guest_name = "Alice"
            room_id = 101
            check_in = "2024-01-01"
            check_out = "2024-01-03"
            total_amount = 6000.0
            paid = true
        "#,
        )
        .unwrap();

        assert_eq!(hotel.catalog().len(), 1);
        let r = hotel.ledger().get("R000001-0a0b").unwrap();
        assert!(r.is_paid());
        assert_eq!(r.nights(), 2);
        assert_eq!(hotel.ids().next_sequence(), 2);
    }

    #[test]
    fn test_sequence_is_raised_past_stored_ids() {
        let hotel = parse(
            r#"
            version = 1
            next_sequence = 1

            [[rooms]]
            id = 101
            category = "suite"
            price_per_night = 9000.0

            [[reservations]]
            id = "R000007-0000"
            guest_name = "Bob"
            room_id = 101
            check_in = "2024-01-01"
            check_out = "2024-01-02"
            total_amount = 9000.0
        "#,
        )
        .unwrap();
        assert_eq!(hotel.ids().next_sequence(), 8);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = parse("version = 2").unwrap_err();
        assert!(err.to_string().contains("Unsupported snapshot version 2"));
    }

    #[test]
    fn test_rejects_dangling_room_reference() {
        let err = parse(
            r#"
            version = 1

            [[reservations]]
            id = "R000001-0000"
            guest_name = "Ghost"
            room_id = 404
            check_in = "2024-01-01"
            check_out = "2024-01-02"
            total_amount = 1.0
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown room 404"));
    }

    #[test]
    fn test_capture_then_rebuild_keeps_state() {
        let toml_content = r#"
            version = 1
            next_sequence = 4

            [[rooms]]
            id = 105
            category = "deluxe"
            price_per_night = 5000.0

            [[reservations]]
            id = "R000003-beef"
            guest_name = "Carol"
            room_id = 105
            check_in = "2024-02-01"
            check_out = "2024-02-04"
            total_amount = 15000.0
            paid = false
        "#;
        let original: SnapshotFile = toml::from_str(toml_content).unwrap();
        let hotel = original.clone().into_hotel().unwrap();
        let encoded = toml::to_string_pretty(&SnapshotFile::capture(&hotel)).unwrap();
        let decoded: SnapshotFile = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    const ROOM_101: &str = r#"
            version = 1

            [[rooms]]
            id = 101
            category = "standard"
            price_per_night = 3000.0
    "#;

    fn reservation(id: &str, check_in: &str, check_out: &str, total_amount: &str) -> String {
        format!(
            r#"
            [[reservations]]
            id = "{id}"
            guest_name = "Alice"
            room_id = 101
            check_in = "{check_in}"
            check_out = "{check_out}"
            total_amount = {total_amount}
            "#
        )
    }

    #[test]
    fn test_rejects_duplicate_reservation_id() {
        let doc = format!(
            "{}{}{}",
            ROOM_101,
            reservation("R000001-0000", "2024-01-01", "2024-01-02", "3000.0"),
            reservation("R000001-0000", "2024-02-01", "2024-02-02", "3000.0"),
        );
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));
    }

    #[test]
    fn test_rejects_reversed_stay() {
        let doc = format!(
            "{}{}",
            ROOM_101,
            reservation("R000001-0000", "2024-01-05", "2024-01-05", "3000.0"),
        );
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("checks out (2024-01-05) before it checks in"));
    }

    #[test]
    fn test_rejects_overlapping_reservations() {
        let doc = format!(
            "{}{}{}",
            ROOM_101,
            reservation("R000001-0000", "2024-01-01", "2024-01-05", "12000.0"),
            reservation("R000002-0000", "2024-01-02", "2024-01-04", "6000.0"),
        );
        let err = parse(&doc).unwrap_err();
        assert_eq!(
            err,
            HotelError::Storage(
                "Reservation 'R000002-0000' overlaps reservation 'R000001-0000' on room 101."
                    .into()
            )
        );

        // Back-to-back stays share no night and load fine.
        let doc = format!(
            "{}{}{}",
            ROOM_101,
            reservation("R000001-0000", "2024-01-01", "2024-01-05", "12000.0"),
            reservation("R000002-0000", "2024-01-05", "2024-01-07", "6000.0"),
        );
        assert_eq!(parse(&doc).unwrap().ledger().len(), 2);
    }

    #[test]
    fn test_rejects_invalid_total_amount() {
        for amount in ["-5.0", "0.0", "nan", "inf"] {
            let doc = format!(
                "{}{}",
                ROOM_101,
                reservation("R000001-0000", "2024-01-01", "2024-01-02", amount),
            );
            let err = parse(&doc).unwrap_err();
            assert!(
                err.to_string().contains("invalid total amount"),
                "amount {} was accepted",
                amount
            );
        }
    }

    #[test]
    fn test_rejects_exhausted_id_sequence() {
        let doc = format!(
            "{}{}",
            ROOM_101,
            reservation(&format!("R{}-0000", u64::MAX), "2024-01-01", "2024-01-02", "3000.0"),
        );
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, HotelError::Storage(_)));
        assert!(err.to_string().contains("exhausted"));
    }
}
