//! Storage keys. The names are part of the persisted layout and must not change.

/// Credentials table: `{ [username]: { senha } }`.
pub const USERS: &str = "usuarios";

/// Savings goal: `{ nome, valor }`.
pub const GOAL: &str = "meta";

/// Weekly hours: `{ [weekLabel]: number }`.
pub const WEEKLY_HOURS: &str = "horasApostando";

/// Seed placeholder, never read by the audit log.
pub const USER_LOG_PLACEHOLDER: &str = "logUsuarios";

/// Session marker.
pub const SESSION_USER: &str = "@user";

/// Login audit log: ordered array of login entries.
pub const LOGIN_LOG: &str = "@usuariosLogados";
