//! Goal and weekly-hours records, read and written whole.

use crate::errors::AppResult;
use crate::models::goal::{Goal, WeeklyHours};
use crate::store::{SharedStore, get_json, keys, set_json};
use tracing::warn;

#[derive(Clone)]
pub struct AppData {
    store: SharedStore,
}

impl AppData {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn load_goal(&self) -> Option<Goal> {
        get_json(self.store.as_ref(), keys::GOAL)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to load goal");
                None
            })
    }

    pub async fn save_goal(&self, goal: &Goal) -> AppResult<()> {
        set_json(self.store.as_ref(), keys::GOAL, goal).await
    }

    pub async fn load_weekly_hours(&self) -> Option<WeeklyHours> {
        get_json(self.store.as_ref(), keys::WEEKLY_HOURS)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to load weekly hours");
                None
            })
    }

    pub async fn save_weekly_hours(&self, hours: &WeeklyHours) -> AppResult<()> {
        set_json(self.store.as_ref(), keys::WEEKLY_HOURS, hours).await
    }
}
