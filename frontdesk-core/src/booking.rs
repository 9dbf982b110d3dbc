use chrono::{Duration, NaiveDateTime};

/// A single reservation, exclusively owned by its customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Upper-cased room type name
    pub room_type: String,
    pub nights: i64,
    /// Fixed at creation as price × nights, never recomputed
    pub total_cost: i64,
    pub reserved_at: NaiveDateTime,
    /// Scheduled departure until checkout finalizes it
    pub checkout_at: NaiveDateTime,
    pub room_number: String,
}

impl Booking {
    /// The departure a guest committed to when booking.
    pub fn scheduled_checkout(&self) -> NaiveDateTime {
        self.reserved_at + Duration::days(self.nights)
    }
}

/// Derives the human-readable unit identifier for a new booking.
///
/// The numeric suffix is the available count *before* the booking's
/// decrement, so the same number can be handed out again once counts
/// fluctuate through cancellations or admin overrides. Kept as-is for
/// compatibility with existing data files; it is an identifier for
/// receipts, not a uniqueness guarantee.
pub fn derive_room_number(room_type: &str, count_before: u32) -> String {
    let prefix = match room_type {
        "STANDARD" => "S",
        "DELUXE" => "D",
        "SUITE" => "R",
        _ => "U",
    };

    format!("{prefix}{count_before:02}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_room_number_prefixes() {
        assert_eq!(derive_room_number("STANDARD", 10), "S10");
        assert_eq!(derive_room_number("DELUXE", 5), "D05");
        assert_eq!(derive_room_number("SUITE", 2), "R02");
        assert_eq!(derive_room_number("PENTHOUSE", 1), "U01");
    }
}
