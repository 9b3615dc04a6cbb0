use serde::{Deserialize, Serialize};

/// Value written under `@user` by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub usuario: String,
}
