#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use rsessiongate::core::clock::FixedClock;
use rsessiongate::core::context::AppContext;
use rsessiongate::errors::{AppError, AppResult};
use rsessiongate::store::{KeyValueStore, MemoryStore};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub fn rsg() -> Command {
    cargo_bin_cmd!("rsessiongate")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsessiongate.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a test DB through the CLI (schema + default records)
pub fn init_test_db(db_path: &str) {
    rsg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Local wall-clock time converted to UTC. Panics on ambiguous local times.
pub fn local_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

/// Memory-backed context with a frozen clock at 2025-03-10 10:00 local time.
pub fn memory_ctx() -> (AppContext, Arc<MemoryStore>, Arc<FixedClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(local_at(2025, 3, 10, 10, 0)));
    let ctx = AppContext::new(store.clone()).with_clock(clock.clone());
    (ctx, store, clock)
}

/// Memory store whose reads and writes can be made to fail on demand.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::read(key, "simulated read failure"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::write(key, "simulated write failure"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::write(key, "simulated write failure"));
        }
        self.inner.remove(key).await
    }
}

/// Context over a [`FlakyStore`] with the same frozen clock as [`memory_ctx`].
pub fn flaky_ctx() -> (AppContext, Arc<FlakyStore>) {
    let store = Arc::new(FlakyStore::new());
    let clock = Arc::new(FixedClock::new(local_at(2025, 3, 10, 10, 0)));
    let ctx = AppContext::new(store.clone()).with_clock(clock);
    (ctx, store)
}
