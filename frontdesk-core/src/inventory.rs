use crate::{ReservationError, Result};

/// A class of bookable room and its remaining unit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    /// Nightly price in whole currency units
    pub price: i64,
    /// Units currently available for booking
    pub count: u32,
    /// Amenity labels, in display order
    pub amenities: Vec<String>,
}

impl RoomType {
    pub fn new(price: i64, count: u32, amenities: &[&str]) -> Self {
        Self {
            price,
            count,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// The registry of room types and their available counts.
///
/// Iteration order is insertion order, which is either the order of the
/// persisted rooms file or the default seeding order. Bookings only touch
/// the aggregate counts here; individual bookings live with their customer.
#[derive(Debug, Default)]
pub struct RoomInventory {
    entries: Vec<(String, RoomType)>,
}

impl RoomInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The inventory a fresh installation starts with.
    pub fn seeded() -> Self {
        let mut inventory = Self::new();

        inventory.insert("STANDARD", RoomType::new(100, 10, &["WiFi", "TV"]));
        inventory.insert("DELUXE", RoomType::new(200, 5, &["WiFi", "TV", "Minibar"]));
        inventory.insert(
            "SUITE",
            RoomType::new(300, 2, &["WiFi", "TV", "Minibar", "Jacuzzi"]),
        );

        inventory
    }

    /// Adds a room type, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: &str, room: RoomType) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = room,
            None => self.entries.push((name.to_string(), room)),
        }
    }

    pub fn get(&self, name: &str) -> Result<&RoomType> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, room)| room)
            .ok_or_else(|| ReservationError::not_found("room type", name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut RoomType> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, room)| room)
            .ok_or_else(|| ReservationError::not_found("room type", name))
    }

    /// Administrative override of price and count, used by room management.
    pub fn set_details(&mut self, name: &str, price: i64, count: u32) -> Result<()> {
        let room = self.get_mut(name)?;

        room.price = price;
        room.count = count;

        Ok(())
    }

    /// Takes one unit out of the pool. Fails if none are left.
    pub fn decrement(&mut self, name: &str) -> Result<()> {
        let room = self.get_mut(name)?;

        if room.count == 0 {
            return Err(ReservationError::Unavailable {
                room_type: name.to_string(),
            });
        }

        room.count -= 1;
        Ok(())
    }

    /// Returns units to the pool. No upper cap is enforced.
    pub fn restore(&mut self, name: &str, units: u32) -> Result<()> {
        let room = self.get_mut(name)?;

        room.count += units;
        Ok(())
    }

    pub fn all(&self) -> impl Iterator<Item = (&str, &RoomType)> {
        self.entries.iter().map(|(name, room)| (name.as_str(), room))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
