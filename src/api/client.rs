//! API client for the Walkdown backend's user endpoints.
//!
//! This module provides the `AuthClient` struct that signs employees in,
//! registers new accounts, and keeps the resulting session in local storage.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::auth::{validate_registration, SessionStore};
use crate::config::ClientConfig;
use crate::models::{Credentials, LoginResponse, RegistrationRequest, UserRecord};
use crate::storage::KeyValueStore;

use super::{AuthError, Endpoint};

// ============================================================================
// Constants
// ============================================================================

/// Login endpoint path under the API base URL
const LOGIN_PATH: &str = "/users/login";

/// Registration endpoint path under the API base URL
const REGISTER_PATH: &str = "/users/register";

/// HTTP request timeout in seconds.
/// 30s allows for a slow backend while still failing fast enough for the UI.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the backend's user endpoints.
/// Clone is cheap: the reqwest client and the session store are both
/// reference-counted.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    config: ClientConfig,
    session: SessionStore,
}

impl AuthClient {
    /// Create a client over the given config and storage backend.
    pub fn new(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            config,
            session: SessionStore::new(store),
        })
    }

    /// Sign an employee in and persist the session.
    ///
    /// A success response carrying a token has the token and user record
    /// written to storage before the parsed body is returned; a success
    /// response without one is returned as-is and stores nothing. Failure
    /// responses surface the server's own message when it sends a usable
    /// one, or a fixed per-status message when it does not.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let url = self.config.endpoint(LOGIN_PATH);
        debug!(url = %url, "Sending login request");

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&credentials).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::from_response(Endpoint::Login, status, &body));
        }

        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidResponse(format!("Malformed login response: {}", e)))?;

        match parsed.token {
            Some(ref token) => {
                self.session.save(token, parsed.user.as_ref())?;
                info!("Login succeeded, session stored");
            }
            None => {
                warn!("Login response carried no token, session not stored");
            }
        }

        Ok(parsed)
    }

    /// Register a new employee account.
    ///
    /// Input is validated locally first; nothing is sent when a rule fails.
    /// Success returns the backend's response body untouched and persists
    /// nothing, so the caller is expected to prompt a fresh login.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<serde_json::Value, AuthError> {
        validate_registration(request, &self.config.email_domain)?;

        let url = self.config.endpoint(REGISTER_PATH);
        debug!(url = %url, username = %request.username, "Sending registration request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::from_response(Endpoint::Register, status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            AuthError::InvalidResponse(format!("Malformed registration response: {}", e))
        })
    }

    /// Drop the stored session. Safe to call when already signed out.
    pub fn logout(&self) {
        self.session.clear();
        info!("Logged out, session cleared");
    }

    /// The stored user record from the last login, when present and decodable.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.session.current_user()
    }

    /// The stored session token, verbatim.
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Whether a session token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Access the underlying session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
