use chrono::{Duration, Local, NaiveDateTime};
use log::{info, warn};

use crate::{
    derive_room_number, Booking, CustomerDirectory, PersistenceStore, ReservationError, Result,
    RoomInventory,
};

/// What a guest is told once a booking is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub room_number: String,
    pub total_cost: i64,
}

/// The outcome of cancelling a booking.
///
/// `refund` keeps the name the original receipts use, even though the
/// formula computes the charged portion of the stay. Displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationNotice {
    pub booking: Booking,
    pub nights_stayed: i64,
    pub refund: i64,
}

/// The booking lifecycle operations.
///
/// Holds no state of its own; it borrows the inventory and directory for
/// the duration of one operation and persists the affected stores before
/// returning. Every validation failure leaves all state untouched.
pub struct BookingLedger<'a> {
    inventory: &'a mut RoomInventory,
    directory: &'a mut CustomerDirectory,
    store: &'a PersistenceStore,
}

impl<'a> BookingLedger<'a> {
    pub fn new(
        inventory: &'a mut RoomInventory,
        directory: &'a mut CustomerDirectory,
        store: &'a PersistenceStore,
    ) -> Self {
        Self {
            inventory,
            directory,
            store,
        }
    }

    /// Books a room of the given type for a number of nights.
    ///
    /// The room type input is matched case-insensitively by upper-casing.
    /// The total cost is fixed here and never recomputed later.
    pub fn book_room(
        &mut self,
        username: &str,
        room_type_input: &str,
        nights: i64,
    ) -> Result<BookingReceipt> {
        self.book_room_at(username, room_type_input, nights, Local::now().naive_local())
    }

    pub fn book_room_at(
        &mut self,
        username: &str,
        room_type_input: &str,
        nights: i64,
        now: NaiveDateTime,
    ) -> Result<BookingReceipt> {
        let room_type = room_type_input.to_uppercase();

        let (price, count_before) = {
            let room = self.inventory.get(&room_type)?;
            (room.price, room.count)
        };

        if count_before == 0 {
            return Err(ReservationError::Unavailable { room_type });
        }

        if nights <= 0 {
            return Err(ReservationError::InvalidInput {
                field: "nights",
                reason: "must be a positive number".to_string(),
            });
        }

        // Last validation before any mutation
        self.directory.get(username)?;

        let total_cost = price * nights;
        let room_number = derive_room_number(&room_type, count_before);

        self.inventory.decrement(&room_type)?;

        let booking = Booking {
            room_type,
            nights,
            total_cost,
            reserved_at: now,
            // Provisional until actual checkout
            checkout_at: now + Duration::days(nights),
            room_number: room_number.clone(),
        };

        self.directory
            .get_mut(username)?
            .bookings
            .push(booking.clone());

        self.store.save_reservations(self.directory)?;
        self.store.save_rooms(self.inventory)?;

        info!(
            "{} booked {} {} for {} nights (${})",
            username, booking.room_type, room_number, nights, total_cost
        );

        Ok(BookingReceipt {
            room_number,
            total_cost,
        })
    }

    /// Completes a stay, returning the finalized booking for the receipt.
    ///
    /// The checkout timestamp is the originally scheduled departure, not
    /// the wall clock; early or late checkout does not adjust it, and the
    /// total cost stays as fixed at booking time. The room unit is *not*
    /// returned to inventory; only cancellation restores units.
    pub fn checkout(&mut self, username: &str, booking_index: usize) -> Result<Booking> {
        let customer = self.directory.get_mut(username)?;

        if booking_index >= customer.bookings.len() {
            return Err(ReservationError::InvalidSelection {
                index: booking_index,
            });
        }

        let mut booking = customer.bookings.remove(booking_index);
        booking.checkout_at = booking.scheduled_checkout();

        self.store.append_checkout(username, &booking)?;
        self.store.save_reservations(self.directory)?;

        info!(
            "{} checked out of {} {} (${})",
            username, booking.room_type, booking.room_number, booking.total_cost
        );

        Ok(booking)
    }

    /// Aborts a stay, charging for nights already consumed and returning
    /// the unused units to inventory.
    pub fn cancel(&mut self, username: &str, booking_index: usize) -> Result<CancellationNotice> {
        self.cancel_at(username, booking_index, Local::now().naive_local())
    }

    pub fn cancel_at(
        &mut self,
        username: &str,
        booking_index: usize,
        now: NaiveDateTime,
    ) -> Result<CancellationNotice> {
        let customer = self.directory.get_mut(username)?;

        if booking_index >= customer.bookings.len() {
            return Err(ReservationError::InvalidSelection {
                index: booking_index,
            });
        }

        let booking = customer.bookings.remove(booking_index);

        // Whole days only; clamped so clock skew can't go negative and an
        // overstayed booking can't drive the available count below zero.
        let nights_stayed = (now - booking.reserved_at).num_days().clamp(0, booking.nights);
        let refund = nights_stayed * booking.total_cost / booking.nights;

        let unused_units = (booking.nights - nights_stayed) as u32;
        if let Err(e) = self.inventory.restore(&booking.room_type, unused_units) {
            // The booking's room type no longer exists in inventory; the
            // cancellation still goes through, the units are just lost.
            warn!("could not restore {unused_units} units: {e}");
        }

        self.store.save_reservations(self.directory)?;
        self.store.save_rooms(self.inventory)?;
        self.store
            .append_cancellation(username, &booking, refund, now)?;

        info!(
            "{} cancelled {} {} after {} nights (refund ${})",
            username, booking.room_type, booking.room_number, nights_stayed, refund
        );

        Ok(CancellationNotice {
            booking,
            nights_stayed,
            refund,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutil::temp_store;
    use chrono::NaiveDate;

    struct Fixture {
        inventory: RoomInventory,
        directory: CustomerDirectory,
        store: PersistenceStore,
        _dir: std::path::PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let (store, dir) = temp_store();

            let mut directory = CustomerDirectory::new();
            directory.create("alice", "pw").unwrap();

            Self {
                inventory: RoomInventory::seeded(),
                directory,
                store,
                _dir: dir,
            }
        }

        fn ledger(&mut self) -> BookingLedger<'_> {
            BookingLedger::new(&mut self.inventory, &mut self.directory, &self.store)
        }

        fn count(&self, room_type: &str) -> u32 {
            self.inventory.get(room_type).unwrap().count
        }

        fn bookings(&self) -> &[Booking] {
            &self.directory.get("alice").unwrap().bookings
        }
    }

    fn day(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_book_standard_room() {
        let mut fx = Fixture::new();

        let receipt = fx
            .ledger()
            .book_room_at("alice", "standard", 3, day(1))
            .unwrap();

        assert_eq!(receipt.room_number, "S10");
        assert_eq!(receipt.total_cost, 300);
        assert_eq!(fx.count("STANDARD"), 9);

        let booking = &fx.bookings()[0];
        assert_eq!(booking.room_type, "STANDARD", "input is upper-cased");
        assert_eq!(booking.reserved_at, day(1));
        assert_eq!(booking.checkout_at, day(4), "provisional departure");
    }

    #[test]
    fn test_book_validation_failures_leave_state_untouched() {
        let mut fx = Fixture::new();
        fx.inventory.set_details("SUITE", 300, 0).unwrap();

        assert!(matches!(
            fx.ledger().book_room_at("alice", "CABIN", 2, day(1)),
            Err(ReservationError::NotFound { .. })
        ));
        assert!(matches!(
            fx.ledger().book_room_at("alice", "suite", 2, day(1)),
            Err(ReservationError::Unavailable { .. })
        ));
        assert!(matches!(
            fx.ledger().book_room_at("alice", "DELUXE", 0, day(1)),
            Err(ReservationError::InvalidInput { .. })
        ));
        assert!(matches!(
            fx.ledger().book_room_at("mallory", "DELUXE", 2, day(1)),
            Err(ReservationError::NotFound { .. })
        ));

        assert_eq!(fx.count("DELUXE"), 5);
        assert!(fx.bookings().is_empty(), "no partial mutation on failure");
    }

    #[test]
    fn test_checkout_retires_the_unit() {
        let mut fx = Fixture::new();
        fx.ledger()
            .book_room_at("alice", "STANDARD", 3, day(1))
            .unwrap();

        let booking = fx.ledger().checkout("alice", 0).unwrap();

        assert_eq!(
            booking.checkout_at,
            day(4),
            "checkout time is the scheduled departure"
        );
        assert_eq!(booking.total_cost, 300, "cost is not recomputed");
        assert!(fx.bookings().is_empty());
        assert_eq!(
            fx.count("STANDARD"),
            9,
            "checkout never restores inventory"
        );
    }

    #[test]
    fn test_same_day_cancel_restores_everything() {
        let mut fx = Fixture::new();
        fx.ledger()
            .book_room_at("alice", "DELUXE", 5, day(1))
            .unwrap();
        assert_eq!(fx.count("DELUXE"), 4);

        let notice = fx.ledger().cancel_at("alice", 0, day(1)).unwrap();

        assert_eq!(notice.nights_stayed, 0);
        assert_eq!(notice.refund, 0);
        assert_eq!(fx.count("DELUXE"), 5, "all five nights restored");
        assert!(fx.bookings().is_empty());
    }

    #[test]
    fn test_partial_stay_cancel() {
        let mut fx = Fixture::new();
        fx.ledger()
            .book_room_at("alice", "DELUXE", 5, day(1))
            .unwrap();

        let notice = fx.ledger().cancel_at("alice", 0, day(3)).unwrap();

        assert_eq!(notice.nights_stayed, 2);
        assert_eq!(notice.refund, 2 * 1000 / 5);
        assert_eq!(
            fx.count("DELUXE"),
            4 + 3,
            "only the three unused nights are restored"
        );
    }

    #[test]
    fn test_cancel_clamps_clock_skew_and_overstay() {
        let mut fx = Fixture::new();
        fx.ledger()
            .book_room_at("alice", "STANDARD", 2, day(10))
            .unwrap();
        fx.ledger()
            .book_room_at("alice", "STANDARD", 2, day(10))
            .unwrap();

        // Clock went backwards: counts as zero nights stayed
        let notice = fx.ledger().cancel_at("alice", 0, day(8)).unwrap();
        assert_eq!(notice.nights_stayed, 0);
        assert_eq!(notice.refund, 0);

        // Overstayed past the booked nights: clamped to the full stay
        let notice = fx.ledger().cancel_at("alice", 0, day(20)).unwrap();
        assert_eq!(notice.nights_stayed, 2);
        assert_eq!(notice.refund, notice.booking.total_cost);

        assert_eq!(fx.count("STANDARD"), 10, "count never goes negative");
    }

    #[test]
    fn test_invalid_selection() {
        let mut fx = Fixture::new();

        assert!(matches!(
            fx.ledger().checkout("alice", 0),
            Err(ReservationError::InvalidSelection { index: 0 })
        ));
        assert!(matches!(
            fx.ledger().cancel_at("alice", 3, day(1)),
            Err(ReservationError::InvalidSelection { index: 3 })
        ));
    }

    #[test]
    fn test_room_numbers_follow_the_count() {
        let mut fx = Fixture::new();

        let first = fx
            .ledger()
            .book_room_at("alice", "SUITE", 1, day(1))
            .unwrap();
        let second = fx
            .ledger()
            .book_room_at("alice", "SUITE", 1, day(1))
            .unwrap();

        assert_eq!(first.room_number, "R02");
        assert_eq!(second.room_number, "R01");
    }

    #[test]
    fn test_operations_persist_their_stores() {
        let mut fx = Fixture::new();
        fx.ledger()
            .book_room_at("alice", "STANDARD", 3, day(1))
            .unwrap();

        let mut reloaded = CustomerDirectory::new();
        reloaded.create("alice", "pw").unwrap();
        fx.store.load_reservations(&mut reloaded).unwrap();
        assert_eq!(reloaded.get("alice").unwrap().bookings.len(), 1);

        let rooms = fx.store.load_rooms().unwrap().unwrap();
        assert_eq!(rooms.get("STANDARD").unwrap().count, 9);

        fx.ledger().checkout("alice", 0).unwrap();

        let mut after = CustomerDirectory::new();
        after.create("alice", "pw").unwrap();
        fx.store.load_reservations(&mut after).unwrap();
        assert!(
            after.get("alice").unwrap().bookings.is_empty(),
            "checkout rewrites the reservations file without the booking"
        );
    }
}
