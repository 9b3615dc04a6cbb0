use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One element of the login audit log (`@usuariosLogados`).
///
/// Missing fields decode to their defaults so older or hand-edited records
/// still load; [`LoginEntry::local_date`] copes with whichever half survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEntry {
    #[serde(default)]
    pub usuario: String,
    #[serde(rename = "dataLogin", default)]
    pub data_login: String,
    #[serde(default)]
    pub timestamp: i64,
}

impl LoginEntry {
    pub fn new(usuario: &str, at: DateTime<Utc>) -> Self {
        Self {
            usuario: usuario.to_string(),
            data_login: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: at.timestamp_millis(),
        }
    }

    /// Local calendar date of the login.
    ///
    /// Taken from `dataLogin`; falls back to `timestamp` when the string
    /// does not parse. `None` only if both are unusable (a zero timestamp
    /// counts as missing).
    pub fn local_date(&self) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.data_login) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
        if self.timestamp <= 0 {
            return None;
        }
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.date_naive())
    }
}
