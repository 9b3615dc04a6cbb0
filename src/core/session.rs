//! Session marker handling (`@user`) and the login/registration actions.
//!
//! Error policy per operation:
//!
//! | operation          | on storage/parse failure                  |
//! |--------------------|-------------------------------------------|
//! | `is_authenticated` | logged, returns `false`                   |
//! | `current_user`     | logged, returns `None`                    |
//! | `logout`           | logged, returned to the caller            |
//! | `login`            | returned to the caller                    |
//! | `register`         | returned to the caller                    |

use crate::core::audit::LoginAudit;
use crate::errors::{AppError, AppResult};
use crate::models::credential::{Credential, Credentials};
use crate::models::session_user::SessionUser;
use crate::store::{KeyLocks, SharedStore, get_json, keys, set_json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct SessionManager {
    store: SharedStore,
    locks: Arc<KeyLocks>,
}

impl SessionManager {
    pub fn new(store: SharedStore, locks: Arc<KeyLocks>) -> Self {
        Self { store, locks }
    }

    /// True iff `@user` holds a non-null value. Fails closed.
    pub async fn is_authenticated(&self) -> bool {
        match self.store.get(keys::SESSION_USER).await {
            Ok(Some(raw)) => raw.trim() != "null",
            Ok(None) => false,
            Err(e) => {
                error!(error = %e, "failed to check authentication");
                false
            }
        }
    }

    /// Parsed content of `@user`, or `None` when absent or unreadable.
    pub async fn current_user(&self) -> Option<Value> {
        match get_json::<Value>(self.store.as_ref(), keys::SESSION_USER).await {
            Ok(Some(Value::Null)) | Ok(None) => None,
            Ok(Some(v)) => Some(v),
            Err(e) => {
                error!(error = %e, "failed to load current user");
                None
            }
        }
    }

    pub async fn logout(&self) -> AppResult<()> {
        match self.store.remove(keys::SESSION_USER).await {
            Ok(()) => {
                info!("logout completed");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "logout failed");
                Err(e)
            }
        }
    }

    /// Check `username`/`password` against `usuarios`, store the session
    /// marker and append to the login audit log.
    pub async fn login(
        &self,
        audit: &LoginAudit,
        username: &str,
        password: &str,
    ) -> AppResult<SessionUser> {
        let username = username.trim();
        let credentials: Credentials = get_json(self.store.as_ref(), keys::USERS)
            .await?
            .unwrap_or_default();

        match credentials.get(username) {
            Some(c) if c.senha == password => {}
            _ => {
                warn!(user = username, "login rejected");
                return Err(AppError::InvalidCredentials);
            }
        }

        let user = SessionUser {
            usuario: username.to_string(),
        };
        set_json(self.store.as_ref(), keys::SESSION_USER, &user).await?;
        audit.record_login(username).await;

        info!(user = username, "login succeeded");
        Ok(user)
    }

    /// Add a credential to `usuarios`. Existing usernames are never replaced.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation("username must not be empty".into()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("password must not be empty".into()));
        }

        let _guard = self.locks.lock(keys::USERS).await;

        let mut credentials: Credentials = get_json(self.store.as_ref(), keys::USERS)
            .await?
            .unwrap_or_default();

        if credentials.contains_key(username) {
            return Err(AppError::UserExists(username.to_string()));
        }

        credentials.insert(
            username.to_string(),
            Credential {
                senha: password.to_string(),
            },
        );
        set_json(self.store.as_ref(), keys::USERS, &credentials).await?;

        info!(user = username, "user registered");
        Ok(())
    }
}
