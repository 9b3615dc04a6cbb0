//! Per-key mutual exclusion for read-modify-write cycles.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per storage key, created on first use.
///
/// Holding the guard returned by [`KeyLocks::lock`] for the whole
/// read-modify-write makes the cycle atomic with respect to every other
/// caller going through the same `KeyLocks`. Keys are independent: locking
/// `@usuariosLogados` never waits on `usuarios`.
///
/// The table lives in memory, so the guarantee is per process. Writers in
/// other processes are only excluded where the store's
/// [`update`](crate::store::KeyValueStore::update) is itself atomic, as with
/// [`SqliteStore`](crate::store::SqliteStore).
#[derive(Debug, Default)]
pub struct KeyLocks {
    slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        slot.lock_owned().await
    }
}
