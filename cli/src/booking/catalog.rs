//! # Room Catalog
//!
//! File: cli/src/booking/catalog.rs
//!
//! The fixed set of rooms the hotel offers, keyed by room id. Iteration is in
//! ascending id order so listings and search results are reproducible.
//!
use super::model::{Category, Room};
use crate::core::error::HotelError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomCatalog {
    rooms: BTreeMap<u32, Room>,
}

impl RoomCatalog {
    /// Builds a catalog, rejecting duplicate room ids.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Result<Self, HotelError> {
        let mut map = BTreeMap::new();
        for room in rooms {
            let id = room.id();
            if map.insert(id, room).is_some() {
                return Err(HotelError::Config(format!(
                    "Room {} appears more than once in the catalog.",
                    id
                )));
            }
        }
        Ok(Self { rooms: map })
    }

    pub fn get(&self, id: u32) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.rooms.contains_key(&id)
    }

    /// All rooms in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Rooms of one category, or every room when `category` is `None`.
    pub fn filtered(&self, category: Option<Category>) -> impl Iterator<Item = &Room> {
        self.rooms
            .values()
            .filter(move |room| category.map_or(true, |c| room.category() == c))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
