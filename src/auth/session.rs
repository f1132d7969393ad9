use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::AuthError;
use crate::models::UserRecord;
use crate::storage::KeyValueStore;

/// Storage key holding the raw session token
const TOKEN_KEY: &str = "authToken";

/// Storage key holding the JSON-encoded user record
const USER_KEY: &str = "user";

/// Persistent session state: the token and user record from the last login.
///
/// Sessions live until an explicit logout. The client never inspects or
/// expires the token; its presence in storage is the authentication signal.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write a fresh session, replacing any previous one.
    ///
    /// A login that carries no user record still removes the stored one, so
    /// a stale record from an earlier account cannot survive.
    pub fn save(&self, token: &str, user: Option<&UserRecord>) -> Result<(), AuthError> {
        self.store
            .set(TOKEN_KEY, token)
            .map_err(AuthError::Storage)?;

        match user {
            Some(user) => {
                let encoded =
                    serde_json::to_string(user).map_err(|e| AuthError::Storage(e.into()))?;
                self.store
                    .set(USER_KEY, &encoded)
                    .map_err(AuthError::Storage)?;
            }
            None => {
                self.store.remove(USER_KEY).map_err(AuthError::Storage)?;
            }
        }
        Ok(())
    }

    /// Delete both session keys.
    ///
    /// Best-effort: a failure on one key is logged and the other is still
    /// attempted, so logout never strands the caller signed in.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!(error = %e, "Failed to delete stored token");
        }
        if let Err(e) = self.store.remove(USER_KEY) {
            warn!(error = %e, "Failed to delete stored user record");
        }
    }

    /// The stored token, verbatim. `None` when absent or unreadable.
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Failed to read stored token");
                None
            }
        }
    }

    /// The stored user record. `None` when absent, unreadable, or when the
    /// stored value is not valid JSON.
    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = %e, "Failed to read stored user record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Stored user record is not valid JSON");
                None
            }
        }
    }

    /// Whether a token is stored. Presence alone decides; the value is never
    /// validated against the server.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
