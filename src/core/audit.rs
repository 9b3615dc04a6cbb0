//! Login audit log stored as one JSON array under `@usuariosLogados`.
//!
//! Entries are kept oldest first. A user gets at most one entry per local
//! calendar day and the array never grows past the configured cap; the
//! oldest entries are dropped first. The read-modify-write runs under the
//! per-key lock and through [`KeyValueStore::update`] so both rules hold with
//! concurrent callers, including other processes sharing a SQLite file.

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::login_entry::LoginEntry;
use crate::store::{KeyLocks, KeyValueStore, SharedStore, keys};
use chrono::Local;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, info, warn};

pub const DEFAULT_LOG_CAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Appended { len: usize },
    AlreadyLoggedToday,
}

#[derive(Clone)]
pub struct LoginAudit {
    store: SharedStore,
    locks: Arc<KeyLocks>,
    clock: Arc<dyn Clock>,
    cap: usize,
}

impl LoginAudit {
    pub fn new(
        store: SharedStore,
        locks: Arc<KeyLocks>,
        clock: Arc<dyn Clock>,
        cap: usize,
    ) -> Self {
        Self {
            store,
            locks,
            clock,
            cap: cap.max(1),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Fire-and-forget variant of [`LoginAudit::try_record_login`]: failures are logged only.
    pub async fn record_login(&self, username: &str) {
        match self.try_record_login(username).await {
            Ok(RecordOutcome::Appended { len }) => {
                info!(user = username, entries = len, "login recorded")
            }
            Ok(RecordOutcome::AlreadyLoggedToday) => {
                debug!(user = username, "login already recorded today")
            }
            Err(e) => error!(user = username, error = %e, "failed to record login"),
        }
    }

    pub async fn try_record_login(&self, username: &str) -> AppResult<RecordOutcome> {
        let _guard = self.locks.lock(keys::LOGIN_LOG).await;

        let now = self.clock.now();
        let cap = self.cap;
        let user = username.to_string();
        let len = Arc::new(AtomicUsize::new(0));
        let len_out = Arc::clone(&len);

        let written = self
            .store
            .update(
                keys::LOGIN_LOG,
                Box::new(move |raw: Option<String>| -> AppResult<Option<String>> {
                    let mut entries = decode_log(raw.as_deref());

                    let today = now.with_timezone(&Local).date_naive();
                    let already = entries
                        .iter()
                        .filter_map(as_entry)
                        .any(|e| e.usuario == user && e.local_date() == Some(today));
                    if already {
                        return Ok(None);
                    }

                    let entry = serde_json::to_value(LoginEntry::new(&user, now))
                        .map_err(|e| AppError::write(keys::LOGIN_LOG, e))?;
                    entries.push(entry);
                    if entries.len() > cap {
                        let excess = entries.len() - cap;
                        entries.drain(..excess);
                    }
                    len_out.store(entries.len(), Ordering::SeqCst);

                    serde_json::to_string(&entries)
                        .map(Some)
                        .map_err(|e| AppError::write(keys::LOGIN_LOG, e))
                }),
            )
            .await?;

        if written {
            Ok(RecordOutcome::Appended {
                len: len.load(Ordering::SeqCst),
            })
        } else {
            Ok(RecordOutcome::AlreadyLoggedToday)
        }
    }

    /// Whole log, oldest first. Empty on any failure; elements that are not
    /// login records are left out.
    pub async fn dump_log(&self) -> Vec<LoginEntry> {
        match self.store.get(keys::LOGIN_LOG).await {
            Ok(raw) => {
                let entries: Vec<LoginEntry> = decode_log(raw.as_deref())
                    .iter()
                    .filter_map(as_entry)
                    .collect();
                debug!(entries = entries.len(), "login log loaded");
                entries
            }
            Err(e) => {
                error!(error = %e, "failed to load login log");
                Vec::new()
            }
        }
    }
}

/// Stored array as raw JSON elements. Elements are kept even when they do
/// not decode as a [`LoginEntry`], so they survive the next write and still
/// count toward the cap. Anything other than an array reads as empty.
fn decode_log(raw: Option<&str>) -> Vec<Value> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!(key = keys::LOGIN_LOG, "login log is not an array, starting empty");
            Vec::new()
        }
        Err(e) => {
            warn!(key = keys::LOGIN_LOG, error = %e, "login log unreadable, starting empty");
            Vec::new()
        }
    }
}

fn as_entry(value: &Value) -> Option<LoginEntry> {
    serde_json::from_value(value.clone()).ok()
}
