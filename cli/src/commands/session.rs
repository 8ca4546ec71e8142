//! # hotelrs Session
//!
//! File: cli/src/commands/session.rs
//!
//! ## Overview
//!
//! A `Session` owns the `Hotel` for one run of the program together with the
//! path of its snapshot file. It is built once in `main` (load the snapshot,
//! or seed a fresh hotel when none exists), handed to the command handler,
//! and saved by handlers that change the ledger.
//!
use crate::booking::Hotel;
use crate::core::config::{self, Config};
use crate::core::error::{HotelError, Result};
use crate::store::{self, seed};
use std::path::{Path, PathBuf};
use tracing::info;

/// How the session's hotel came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Loaded,
    Seeded,
}

#[derive(Debug)]
pub struct Session {
    pub hotel: Hotel,
    data_file: PathBuf,
    origin: Origin,
}

impl Session {
    /// Loads configuration and opens the hotel. `data_file` overrides `storage.data_file`.
    pub fn open(data_file: Option<PathBuf>) -> Result<Self> {
        let cfg = config::load_config()?;
        let path = data_file.unwrap_or_else(|| PathBuf::from(&cfg.storage.data_file));
        Self::open_with(cfg, path)
    }

    /// Opens the snapshot at `data_file`, seeding from `cfg` if it does not exist yet.
    pub fn open_with(cfg: Config, data_file: PathBuf) -> Result<Self> {
        let (hotel, origin) = match store::load(&data_file)? {
            Some(hotel) => (hotel, Origin::Loaded),
            None => {
                info!(
                    "No snapshot at {}; starting with seeded hotel data.",
                    data_file.display()
                );
                (Hotel::new(seed::catalog_from_config(&cfg.seed)?), Origin::Seeded)
            }
        };
        Ok(Self {
            hotel,
            data_file,
            origin,
        })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn save(&self) -> Result<()> {
        store::save(&self.hotel, &self.data_file)
    }

    /// Replaces the in-memory hotel with the snapshot on disk.
    ///
    /// Fails if no snapshot has been saved yet; the current state is kept in that case.
    pub fn reload(&mut self) -> Result<()> {
        match store::load(&self.data_file)? {
            Some(hotel) => {
                self.hotel = hotel;
                self.origin = Origin::Loaded;
                Ok(())
            }
            None => Err(HotelError::Storage(format!(
                "No saved data at {}",
                self.data_file.display()
            ))
            .into()),
        }
    }
}
