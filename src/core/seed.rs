//! Default records written at startup.

use crate::errors::AppResult;
use crate::store::{KeyLocks, SharedStore, keys, set_json};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// How the seeder treats keys that already hold a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Replace existing values on every run. Destroys user edits to the seeded keys.
    Overwrite,
    /// Write a key only when it is missing.
    #[default]
    IfAbsent,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub written: Vec<&'static str>,
    pub kept: Vec<&'static str>,
}

/// The four seeded keys and their default JSON values, in write order.
pub fn default_records() -> Vec<(&'static str, Value)> {
    vec![
        (keys::USERS, json!({ "admin": { "senha": "12345" } })),
        (keys::GOAL, json!({ "nome": "PlayStation 5", "valor": 4500 })),
        (
            keys::WEEKLY_HOURS,
            json!({ "sem1": 6, "sem2": 4, "sem3": 5, "sem4": 3 }),
        ),
        (keys::USER_LOG_PLACEHOLDER, json!({})),
    ]
}

#[derive(Clone)]
pub struct Seeder {
    store: SharedStore,
    locks: Arc<KeyLocks>,
    policy: SeedPolicy,
}

impl Seeder {
    pub fn new(store: SharedStore, locks: Arc<KeyLocks>, policy: SeedPolicy) -> Self {
        Self {
            store,
            locks,
            policy,
        }
    }

    pub fn policy(&self) -> SeedPolicy {
        self.policy
    }

    /// Write the default records according to the configured policy.
    ///
    /// Stops at the first storage failure and returns it; keys written
    /// before the failure stay written.
    pub async fn seed_defaults(&self) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        for (key, value) in default_records() {
            let _guard = self.locks.lock(key).await;

            if self.policy == SeedPolicy::IfAbsent && self.store.get(key).await?.is_some() {
                debug!(key, "seed skipped, key already present");
                report.kept.push(key);
                continue;
            }

            set_json(self.store.as_ref(), key, &value).await?;
            report.written.push(key);
        }

        info!(
            policy = ?self.policy,
            written = report.written.len(),
            kept = report.kept.len(),
            "default records seeded"
        );
        Ok(report)
    }
}
