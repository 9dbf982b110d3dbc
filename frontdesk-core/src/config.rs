use std::path::{Path, PathBuf};

/// Locations of the flat-file stores.
///
/// The three primary stores are rewritten in full on every save; the two
/// audit logs are append-only and never read back by the engine.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// `username|password`, one customer per line
    pub customers_path: PathBuf,
    /// `roomType|price|count|amenity1,amenity2,...`
    pub rooms_path: PathBuf,
    /// `username|roomType|nights|totalCost|reservationTime|checkoutTime|roomNumber`
    pub reservations_path: PathBuf,
    /// Append-only trail of cancelled bookings
    pub cancellations_path: PathBuf,
    /// Append-only trail of completed stays
    pub checkouts_path: PathBuf,
}

impl StoreConfig {
    /// Conventional file names, rooted at the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            customers_path: dir.join("customers.txt"),
            rooms_path: dir.join("rooms.txt"),
            reservations_path: dir.join("reservations.txt"),
            cancellations_path: dir.join("cancellations.txt"),
            checkouts_path: dir.join("checkouts.txt"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
