//! SQLite-backed key/value store.

use super::{KeyValueStore, UpdateFn};
use crate::db::initialize::init_db;
use crate::db::log::{LogRow, read_log, ttlog};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use std::sync::{Arc, Mutex};

const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

#[derive(Clone, Copy)]
enum Access {
    Read,
    Write,
}

impl Access {
    fn error(self, key: &str, reason: impl ToString) -> AppError {
        match self {
            Access::Read => AppError::read(key, reason),
            Access::Write => AppError::write(key, reason),
        }
    }
}

/// Persistent store living in the `kv` table of a single SQLite file.
///
/// rusqlite is blocking, so each call hops onto the blocking pool and
/// serializes on the connection mutex.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Arc<Mutex<DbPool>>,
    path: String,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool: Arc::new(Mutex::new(pool)),
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    async fn run<F, T>(&self, key: &str, access: Access, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        let owned_key = key.to_string();

        let joined = tokio::task::spawn_blocking(move || {
            let mut guard = pool
                .lock()
                .map_err(|_| access.error(&owned_key, "connection mutex poisoned"))?;
            guard
                .with_conn(|conn| func(conn))
                .map_err(|e| access.error(&owned_key, e))
        })
        .await;

        joined.map_err(|e| access.error(key, e))?
    }

    /// Append a row to the internal operation log.
    pub async fn log_operation(
        &self,
        operation: &str,
        target: &str,
        message: &str,
    ) -> AppResult<()> {
        let pool = Arc::clone(&self.pool);
        let (operation, target, message) =
            (operation.to_string(), target.to_string(), message.to_string());

        tokio::task::spawn_blocking(move || {
            let guard = pool
                .lock()
                .map_err(|_| AppError::Other("connection mutex poisoned".into()))?;
            ttlog(&guard.conn, &operation, &target, &message)
        })
        .await
        .map_err(|e| AppError::Other(e.to_string()))?
    }

    /// Every row of the internal operation log, oldest first.
    pub async fn read_log(&self) -> AppResult<Vec<LogRow>> {
        let pool = Arc::clone(&self.pool);

        tokio::task::spawn_blocking(move || {
            let guard = pool
                .lock()
                .map_err(|_| AppError::Other("connection mutex poisoned".into()))?;
            read_log(&guard.conn)
        })
        .await
        .map_err(|e| AppError::Other(e.to_string()))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let k = key.to_string();
        self.run(key, Access::Read, move |conn| {
            conn.query_row(SELECT_VALUE, params![k], |row| row.get::<_, String>(0))
                .optional()
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let (k, v) = (key.to_string(), value.to_string());
        let now = Local::now().to_rfc3339();
        self.run(key, Access::Write, move |conn| {
            conn.execute(UPSERT_VALUE, params![k, v, now]).map(|_| ())
        })
        .await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let k = key.to_string();
        self.run(key, Access::Write, move |conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![k])
                .map(|_| ())
        })
        .await
    }

    /// `BEGIN IMMEDIATE` takes the write lock before the read, so another
    /// connection updating the same file waits (up to the busy timeout)
    /// instead of interleaving. Dropping the transaction uncommitted rolls back.
    async fn update(&self, key: &str, f: UpdateFn) -> AppResult<bool> {
        let pool = Arc::clone(&self.pool);
        let k = key.to_string();
        let now = Local::now().to_rfc3339();

        tokio::task::spawn_blocking(move || {
            let mut guard = pool
                .lock()
                .map_err(|_| AppError::write(&k, "connection mutex poisoned"))?;
            let tx = guard
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(|e| AppError::write(&k, e))?;

            let current = tx
                .query_row(SELECT_VALUE, params![k], |row| row.get::<_, String>(0))
                .optional()
                .map_err(|e| AppError::read(&k, e))?;

            let Some(next) = f(current)? else {
                return Ok(false);
            };

            tx.execute(UPSERT_VALUE, params![k, next, now])
                .map_err(|e| AppError::write(&k, e))?;
            tx.commit().map_err(|e| AppError::write(&k, e))?;
            Ok(true)
        })
        .await
        .map_err(|e| AppError::write(key, e))?
    }
}
