use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

const KV_TABLE_VERSION: &str = "20250301_0001_create_kv";

/// Ensure that the `log` table exists with the current schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Check whether a migration marker is already present in `log`.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the `kv` table holding every persisted value.
fn create_kv_table(conn: &Connection) -> Result<()> {
    if migration_applied(conn, KV_TABLE_VERSION)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Created kv table')",
        [KV_TABLE_VERSION],
    )?;

    info!(version = KV_TABLE_VERSION, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; invoked by `db::initialize::init_db()` on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_kv_table(conn)?;
    Ok(())
}
