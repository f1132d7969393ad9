//! Client configuration.
//!
//! This module holds the two settings the auth client needs: the backend
//! base URL and the organization email domain accepted for employee
//! accounts. Both can be overridden through environment variables so the
//! same build can point at a local, staging, or production backend.

/// Environment variable overriding the API base URL
const API_URL_ENV: &str = "WALKDOWN_API_URL";

/// Environment variable overriding the accepted email domain
const EMAIL_DOMAIN_ENV: &str = "WALKDOWN_EMAIL_DOMAIN";

/// Default backend base URL (local development server)
const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Default email domain employee accounts must belong to
const DEFAULT_EMAIL_DOMAIN: &str = "siemens-energy.com";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, with or without a trailing slash.
    pub base_url: String,
    /// Domain every employee email must belong to.
    pub email_domain: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, email_domain: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            email_domain: email_domain.into(),
        }
    }

    /// Build a config from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let email_domain =
            std::env::var(EMAIL_DOMAIN_ENV).unwrap_or_else(|_| DEFAULT_EMAIL_DOMAIN.to_string());
        Self {
            base_url,
            email_domain,
        }
    }

    /// Join an endpoint path onto the base URL without doubling slashes.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
