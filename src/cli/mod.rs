pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use std::sync::Arc;
use tracing::warn;

/// Everything a command handler needs: configuration, the SQLite store
/// and the component context built on top of it.
pub struct CliApp {
    pub cfg: Config,
    pub store: SqliteStore,
    pub ctx: AppContext,
}

impl CliApp {
    pub fn open(cfg: Config) -> AppResult<Self> {
        cfg.validate()?;
        let store = SqliteStore::open(&cfg.database)?;
        let ctx = AppContext::from_config(Arc::new(store.clone()), &cfg);
        Ok(Self { cfg, store, ctx })
    }

    /// Internal log write; failures are reported and never abort the command.
    pub async fn log_op(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.log_operation(operation, target, message).await {
            warn!(error = %e, operation, "failed to write internal log");
        }
    }
}
