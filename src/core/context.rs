use crate::config::Config;
use crate::core::app_data::AppData;
use crate::core::audit::{DEFAULT_LOG_CAP, LoginAudit};
use crate::core::clock::{Clock, SystemClock};
use crate::core::gate::NavigationGate;
use crate::core::seed::{SeedPolicy, Seeder};
use crate::core::session::SessionManager;
use crate::store::{KeyLocks, SharedStore};
use std::sync::Arc;

/// Shared handles every component is built from.
///
/// All components created from one context share the same lock table, so
/// their read-modify-write cycles on a key are serialized against each other
/// within this process.
#[derive(Clone)]
pub struct AppContext {
    store: SharedStore,
    locks: Arc<KeyLocks>,
    clock: Arc<dyn Clock>,
    seed_policy: SeedPolicy,
    log_cap: usize,
}

impl AppContext {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            locks: Arc::new(KeyLocks::new()),
            clock: Arc::new(SystemClock),
            seed_policy: SeedPolicy::default(),
            log_cap: DEFAULT_LOG_CAP,
        }
    }

    pub fn from_config(store: SharedStore, cfg: &Config) -> Self {
        Self::new(store)
            .with_seed_policy(cfg.seed_policy)
            .with_log_cap(cfg.log_cap)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    pub fn with_log_cap(mut self, cap: usize) -> Self {
        self.log_cap = cap;
        self
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn session(&self) -> SessionManager {
        SessionManager::new(Arc::clone(&self.store), Arc::clone(&self.locks))
    }

    pub fn audit(&self) -> LoginAudit {
        LoginAudit::new(
            Arc::clone(&self.store),
            Arc::clone(&self.locks),
            Arc::clone(&self.clock),
            self.log_cap,
        )
    }

    pub fn gate(&self) -> NavigationGate {
        NavigationGate::new(self.session())
    }

    pub fn seeder(&self) -> Seeder {
        Seeder::new(
            Arc::clone(&self.store),
            Arc::clone(&self.locks),
            self.seed_policy,
        )
    }

    pub fn app_data(&self) -> AppData {
        AppData::new(Arc::clone(&self.store))
    }
}
