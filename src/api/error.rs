use serde::Deserialize;
use thiserror::Error;

/// Error type for every auth client operation.
///
/// `Display` on each variant is the message a screen shows the user, so the
/// wording stays non-technical except where the cause genuinely is.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Input rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a failure status.
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The request never completed (connection refused, DNS failure, timeout).
    #[error("Network error: could not reach the server ({0})")]
    Network(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The session could not be written to or read from local storage.
    #[error("Local storage error: {0}")]
    Storage(anyhow::Error),
}

/// Which endpoint produced a failure; selects the status tables to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
}

type StatusTable = &'static [(u16, &'static str)];

/// Fallback messages for login failures, keyed by status code
const LOGIN_STATUS_MESSAGES: StatusTable = &[
    (401, "Invalid email or password."),
    (403, "Access denied. This account is not allowed to sign in."),
    (404, "API endpoint not found. The server may be misconfigured."),
    (
        422,
        "The server rejected the sign-in data. Check your email and password.",
    ),
    (500, "The server hit an internal error. Please try again later."),
];

/// Registration-specific entries, consulted before the login table
const REGISTER_STATUS_MESSAGES: StatusTable = &[
    (
        409,
        "An account with this email or username already exists.",
    ),
    (400, "The server rejected the registration data. Check your entries."),
];

/// Fallbacks for statuses no table covers
const GENERIC_CLIENT_ERROR: &str = "The server rejected the request. Please check your input.";
const GENERIC_SERVER_ERROR: &str = "The server is currently unavailable. Please try again later.";

impl Endpoint {
    /// Status tables for this endpoint, in priority order.
    fn status_tables(self) -> &'static [StatusTable] {
        match self {
            Endpoint::Login => &[LOGIN_STATUS_MESSAGES],
            Endpoint::Register => &[REGISTER_STATUS_MESSAGES, LOGIN_STATUS_MESSAGES],
        }
    }
}

impl AuthError {
    /// Normalize a failure response into a user-facing error.
    ///
    /// A JSON body carrying a non-empty string `message` wins verbatim;
    /// anything else (HTML error pages, empty bodies, JSON without a usable
    /// message) falls back to the endpoint's status tables.
    pub fn from_response(endpoint: Endpoint, status: reqwest::StatusCode, body: &str) -> Self {
        let message = match server_message(body) {
            Some(message) => message,
            None => status_message(endpoint, status.as_u16()),
        };
        AuthError::Server { status, message }
    }
}

/// Extract the server's own `message` field, if the body carries a usable one
fn server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

fn status_message(endpoint: Endpoint, status: u16) -> String {
    for table in endpoint.status_tables() {
        if let Some((_, message)) = table.iter().find(|(code, _)| *code == status) {
            return (*message).to_string();
        }
    }

    match status {
        400..=499 => GENERIC_CLIENT_ERROR.to_string(),
        500..=599 => GENERIC_SERVER_ERROR.to_string(),
        _ => format!("Request failed with status {}", status),
    }
}
