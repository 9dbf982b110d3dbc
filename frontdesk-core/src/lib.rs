use log::info;

mod booking;
mod config;
mod directory;
mod error;
mod inventory;
mod ledger;
mod store;

#[cfg(test)]
mod testutil;

pub use booking::*;
pub use config::*;
pub use directory::*;
pub use error::*;
pub use inventory::*;
pub use ledger::*;
pub use store::*;

/// The frontdesk reservation system, facilitating room inventory,
/// customer accounts, and the booking lifecycle.
///
/// Owns all in-memory state and the persistence store. The menu shell
/// consuming this is expected to be a single in-process actor; nothing
/// here is safe to share across threads or processes.
pub struct Frontdesk {
    store: PersistenceStore,

    pub inventory: RoomInventory,
    pub directory: CustomerDirectory,
}

impl Frontdesk {
    /// Loads all three primary stores, seeding the default room types on a
    /// first run with no rooms file.
    pub fn initialize(config: StoreConfig) -> Result<Self> {
        let store = PersistenceStore::new(config);

        let mut directory = store.load_customers()?;

        let inventory = match store.load_rooms()? {
            Some(inventory) => inventory,
            None => {
                info!("No rooms file found, seeding default room types");

                let inventory = RoomInventory::seeded();
                store.save_rooms(&inventory)?;

                inventory
            }
        };

        store.load_reservations(&mut directory)?;

        info!(
            "Loaded {} customers and {} room types",
            directory.len(),
            inventory.all().count()
        );

        Ok(Self {
            store,
            inventory,
            directory,
        })
    }

    /// Borrows the inventory, directory, and store for one lifecycle
    /// operation.
    pub fn ledger(&mut self) -> BookingLedger<'_> {
        BookingLedger::new(&mut self.inventory, &mut self.directory, &self.store)
    }

    /// Persists the customers store after a directory mutation.
    pub fn save_customers(&self) -> Result<()> {
        self.store.save_customers(&self.directory)?;
        Ok(())
    }

    /// Persists the rooms store after an inventory mutation.
    pub fn save_rooms(&self) -> Result<()> {
        self.store.save_rooms(&self.inventory)?;
        Ok(())
    }

    /// Persists the reservations store after a directory mutation.
    pub fn save_reservations(&self) -> Result<()> {
        self.store.save_reservations(&self.directory)?;
        Ok(())
    }

    /// Flushes all three primary stores.
    pub fn shutdown(&self) -> Result<()> {
        self.store.save_customers(&self.directory)?;
        self.store.save_rooms(&self.inventory)?;
        self.store.save_reservations(&self.directory)?;

        info!("All stores flushed");
        Ok(())
    }
}
