//! Asynchronous string-keyed store and the JSON helpers layered on top of it.
//!
//! Every component receives a [`SharedStore`] handle; nothing reaches for a
//! process-wide instance. Values are opaque strings at this level, JSON lives
//! in [`get_json`] / [`set_json`].

pub mod keys;
pub mod locks;
pub mod memory;
pub mod sqlite;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub use locks::KeyLocks;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Read-modify-write of a single key; returns whether a value was written.
    ///
    /// The default is a plain `get` then `set` and relies on the caller's
    /// [`KeyLocks`] guard. [`SqliteStore`] runs both inside one immediate
    /// transaction, which also holds against other processes on the same file.
    async fn update(&self, key: &str, f: UpdateFn) -> AppResult<bool> {
        let current = self.get(key).await?;
        match f(current)? {
            Some(next) => {
                self.set(key, &next).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Maps the current value to its replacement; `None` leaves the key untouched.
pub type UpdateFn = Box<dyn FnOnce(Option<String>) -> AppResult<Option<String>> + Send>;

/// Read and decode the JSON value stored under `key`.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| AppError::Parse {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub async fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| AppError::write(key, e))?;
    store.set(key, &raw).await
}
