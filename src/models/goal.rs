use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Savings goal shown on the Goal screen (`meta` key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub nome: String,
    pub valor: f64,
}

/// Hours per week label (`horasApostando` key), e.g. `sem1 → 6`.
pub type WeeklyHours = BTreeMap<String, f64>;
