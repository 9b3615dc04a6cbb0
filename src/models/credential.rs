use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stored password for one username. Plain text, as persisted by the seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub senha: String,
}

/// Content of the `usuarios` key: username → credential.
pub type Credentials = BTreeMap<String, Credential>;
