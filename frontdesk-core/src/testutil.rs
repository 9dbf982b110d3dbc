use std::path::PathBuf;

use rand::{distributions::Alphanumeric, thread_rng, Rng};

use crate::{PersistenceStore, StoreConfig};

fn random_string(length: usize) -> String {
    let mut rng = thread_rng();

    std::iter::repeat(())
        .map(|_| rng.sample(Alphanumeric) as char)
        .take(length)
        .collect()
}

/// A store pointing at a fresh directory under the system temp dir.
pub fn temp_store() -> (PersistenceStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!("frontdesk-test-{}", random_string(12)));

    std::fs::create_dir_all(&dir).expect("temp dir is created");

    (PersistenceStore::new(StoreConfig::in_dir(&dir)), dir)
}
