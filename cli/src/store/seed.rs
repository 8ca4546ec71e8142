//! # Seed Catalog
//!
//! File: cli/src/store/seed.rs
//!
//! The room catalog a hotel starts with when no snapshot exists yet. The
//! default is nine rooms numbered from 101: four Standard, three Deluxe and
//! two Suites, with prices stepping up inside each category. A config file can
//! replace it with its own `[[seed.rooms]]` list.
//!
use crate::booking::catalog::RoomCatalog;
use crate::booking::model::{Category, Room};
use crate::core::config::SeedConfig;
use crate::core::error::HotelError;

const FIRST_ROOM_ID: u32 = 101;

/// (category, room count, base price, price step)
const DEFAULT_LAYOUT: [(Category, u32, f64, f64); 3] = [
    (Category::Standard, 4, 3000.0, 100.0),
    (Category::Deluxe, 3, 5000.0, 200.0),
    (Category::Suite, 2, 9000.0, 500.0),
];

pub fn default_catalog() -> Result<RoomCatalog, HotelError> {
    let mut rooms = Vec::new();
    let mut id = FIRST_ROOM_ID;
    for (category, count, base, step) in DEFAULT_LAYOUT {
        for i in 0..count {
            rooms.push(Room::new(id, category, base + f64::from(i) * step)?);
            id += 1;
        }
    }
    RoomCatalog::new(rooms)
}

/// Catalog from the config's seed rooms, or the default catalog if none are configured.
pub fn catalog_from_config(seed: &SeedConfig) -> Result<RoomCatalog, HotelError> {
    if seed.rooms.is_empty() {
        return default_catalog();
    }
    let rooms = seed
        .rooms
        .iter()
        .map(|r| Room::new(r.id, r.category, r.price_per_night))
        .collect::<Result<Vec<_>, _>>()?;
    RoomCatalog::new(rooms)
}
