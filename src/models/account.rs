use serde::{Deserialize, Serialize};

/// Opaque user record returned by the backend.
///
/// The client stores it and hands it back untouched; which fields exist is
/// the backend's business.
pub type UserRecord = serde_json::Value;

/// Request body for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Employee email used to sign in.
    pub email: String,
    /// Plaintext password; sent once, never persisted.
    pub password: String,
}

/// Request body for the registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Parsed body of a successful login response.
///
/// The backend normally sends `{token, user}`, but both fields stay optional:
/// a success body without a token is handed back as-is and nothing is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
}
