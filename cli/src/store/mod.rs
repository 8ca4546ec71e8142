//! # hotelrs Snapshot Store
//!
//! File: cli/src/store/mod.rs
//!
//! ## Overview
//!
//! Persistence for a `Hotel`: the whole state is written to one TOML file and
//! read back in one go. There is no partial persistence.
//!
//! ## Architecture
//!
//! - `snapshot`: the versioned record format and its conversion to/from `Hotel`
//! - `seed`: the catalog used when no snapshot exists
//! - `load` / `save` (this file): file access through `common::fs::io`
//!
//! ## Examples
//!
//! ```rust
//! let hotel = match store::load(&path)? {
//!     Some(hotel) => hotel,
//!     None => Hotel::new(store::seed::catalog_from_config(&cfg.seed)?),
//! };
//! // ... run engine operations ...
//! store::save(&hotel, &path)?;
//! ```
//!
pub mod seed;
pub mod snapshot;

use crate::booking::Hotel;
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use snapshot::SnapshotFile;
use std::path::Path;
use tracing::{debug, info};

/// Loads the snapshot at `path`. Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid TOML for the snapshot format,
/// has an unsupported version, or contains inconsistent records.
pub fn load(path: &Path) -> Result<Option<Hotel>> {
    let Some(content) = io::read_optional_file(path)? else {
        debug!("No snapshot at {}", path.display());
        return Ok(None);
    };
    let file: SnapshotFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;
    let hotel = file
        .into_hotel()
        .with_context(|| format!("Snapshot file is inconsistent: {}", path.display()))?;
    info!(
        "Loaded {} room(s) and {} reservation(s) from {}",
        hotel.catalog().len(),
        hotel.ledger().len(),
        path.display()
    );
    Ok(Some(hotel))
}

/// Writes the full state of `hotel` to `path`, replacing any previous snapshot.
pub fn save(hotel: &Hotel, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SnapshotFile::capture(hotel))
        .context("Failed to encode hotel snapshot")?;
    io::write_string_atomically(path, &content)
        .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
    info!(
        "Saved {} reservation(s) to {}",
        hotel.ledger().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::engine;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_missing_file_loads_as_none() -> Result<()> {
        let dir = tempdir()?;
        assert!(load(&dir.path().join("hotel.toml"))?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_then_load_preserves_state() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/hotel.toml");

        let mut hotel = Hotel::new(seed::default_catalog()?);
        let paid = engine::book(&mut hotel, "Alice", 101, date("2024-01-01"), date("2024-01-03"), true)?;
        let unpaid = engine::book(&mut hotel, "Bob", 108, date("2024-01-05"), date("2024-01-06"), false)?;
        save(&hotel, &path)?;

        let loaded = load(&path)?.expect("snapshot should exist");
        assert_eq!(loaded.catalog(), hotel.catalog());
        assert_eq!(loaded.ledger(), hotel.ledger());
        assert_eq!(loaded.ids().next_sequence(), hotel.ids().next_sequence());
        assert!(loaded.ledger().get(paid.id()).unwrap().is_paid());
        assert!(!loaded.ledger().get(unpaid.id()).unwrap().is_paid());

        // Booked ranges survive the round trip.
        assert!(!engine::is_available(&loaded, 101, date("2024-01-02"), date("2024-01-03")));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("hotel.toml");
        fs::write(&path, "this is not = = toml")?;
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse snapshot file"));
        Ok(())
    }
}
