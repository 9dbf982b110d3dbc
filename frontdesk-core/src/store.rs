use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use chrono::NaiveDateTime;
use log::warn;
use thiserror::Error;

use crate::{Booking, CustomerDirectory, RoomInventory, RoomType, StoreConfig};

/// The one timestamp representation used on disk. Format and parser share
/// this string, so every written timestamp reads back with the same parser.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A store file could not be read or written
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Line-oriented codecs for the five store files.
///
/// Records are pipe-delimited, one per line. The three primary stores are
/// rewritten in full; the two audit logs are append-only and write-only.
/// Malformed lines are skipped with a warning rather than failing the load.
#[derive(Debug)]
pub struct PersistenceStore {
    config: StoreConfig,
}

impl PersistenceStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Loads the customers store, or an empty directory if the file is
    /// missing.
    pub fn load_customers(&self) -> StoreResult<CustomerDirectory> {
        let mut directory = CustomerDirectory::new();

        for line in read_lines(&self.config.customers_path)? {
            let fields: Vec<_> = line.split('|').collect();

            let [username, password] = fields[..] else {
                warn!("skipping malformed customer record: {line:?}");
                continue;
            };

            if directory.create(username, password).is_err() {
                warn!("skipping duplicate customer record: {username:?}");
            }
        }

        Ok(directory)
    }

    /// Loads the rooms store. `None` means the file does not exist yet and
    /// the caller should seed defaults.
    pub fn load_rooms(&self) -> StoreResult<Option<RoomInventory>> {
        if !self.config.rooms_path.exists() {
            return Ok(None);
        }

        let mut inventory = RoomInventory::new();

        for line in read_lines(&self.config.rooms_path)? {
            let fields: Vec<_> = line.split('|').collect();

            let [name, price, count, amenities] = fields[..] else {
                warn!("skipping malformed room record: {line:?}");
                continue;
            };

            let (Ok(price), Ok(count)) = (price.parse(), count.parse()) else {
                warn!("skipping room record with non-numeric fields: {line:?}");
                continue;
            };

            let amenities: Vec<&str> = amenities.split(',').collect();
            inventory.insert(name, RoomType::new(price, count, &amenities));
        }

        Ok(Some(inventory))
    }

    /// Loads the reservations store, attaching each booking to its
    /// customer. Bookings for unknown customers are dropped.
    pub fn load_reservations(&self, directory: &mut CustomerDirectory) -> StoreResult<()> {
        for line in read_lines(&self.config.reservations_path)? {
            let Some((username, booking)) = parse_reservation(&line) else {
                warn!("skipping malformed reservation record: {line:?}");
                continue;
            };

            match directory.get_mut(&username) {
                Ok(customer) => customer.bookings.push(booking),
                Err(_) => warn!("dropping orphan booking for unknown customer {username:?}"),
            }
        }

        Ok(())
    }

    pub fn save_customers(&self, directory: &CustomerDirectory) -> StoreResult<()> {
        let mut writer = rewrite(&self.config.customers_path)?;

        for customer in directory.all() {
            writeln!(writer, "{}|{}", customer.username, customer.password)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn save_rooms(&self, inventory: &RoomInventory) -> StoreResult<()> {
        let mut writer = rewrite(&self.config.rooms_path)?;

        for (name, room) in inventory.all() {
            writeln!(
                writer,
                "{}|{}|{}|{}",
                name,
                room.price,
                room.count,
                room.amenities.join(",")
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn save_reservations(&self, directory: &CustomerDirectory) -> StoreResult<()> {
        let mut writer = rewrite(&self.config.reservations_path)?;

        for customer in directory.all() {
            for booking in &customer.bookings {
                writeln!(
                    writer,
                    "{}|{}|{}|{}|{}|{}|{}",
                    customer.username,
                    booking.room_type,
                    booking.nights,
                    booking.total_cost,
                    format_timestamp(booking.reserved_at),
                    format_timestamp(booking.checkout_at),
                    booking.room_number
                )?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Appends one completed stay to the checkouts trail.
    pub fn append_checkout(&self, username: &str, booking: &Booking) -> StoreResult<()> {
        append_line(
            &self.config.checkouts_path,
            &format!(
                "{}|{}|{}|{}|{}|{}|{}",
                username,
                booking.room_number,
                booking.room_type,
                booking.nights,
                booking.total_cost,
                format_timestamp(booking.reserved_at),
                format_timestamp(booking.checkout_at)
            ),
        )
    }

    /// Appends one aborted stay to the cancellations trail.
    pub fn append_cancellation(
        &self,
        username: &str,
        booking: &Booking,
        refund: i64,
        cancelled_at: NaiveDateTime,
    ) -> StoreResult<()> {
        append_line(
            &self.config.cancellations_path,
            &format!(
                "{}|{}|{}|{}|{}|{}|{}",
                username,
                booking.room_number,
                booking.room_type,
                booking.nights,
                refund,
                format_timestamp(booking.reserved_at),
                format_timestamp(cancelled_at)
            ),
        )
    }
}

fn parse_reservation(line: &str) -> Option<(String, Booking)> {
    let fields: Vec<_> = line.split('|').collect();

    let [username, room_type, nights, total_cost, reserved_at, checkout_at, room_number] =
        fields[..]
    else {
        return None;
    };

    // Zero or negative nights would poison the refund arithmetic later
    let nights: i64 = nights.parse().ok().filter(|n| *n > 0)?;

    let booking = Booking {
        room_type: room_type.to_string(),
        nights,
        total_cost: total_cost.parse().ok()?,
        reserved_at: parse_timestamp(reserved_at)?,
        checkout_at: parse_timestamp(checkout_at)?,
        room_number: room_number.to_string(),
    };

    Some((username.to_string(), booking))
}

/// Reads every non-empty line of a store file. A missing file reads as
/// empty, since the first run starts with no stores at all.
fn read_lines(path: &Path) -> StoreResult<Vec<String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

fn rewrite(path: &Path) -> StoreResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

fn append_line(path: &Path, line: &str) -> StoreResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{line}")?;
    Ok(())
}
