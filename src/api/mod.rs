//! REST API client module for the Walkdown backend.
//!
//! This module provides the `AuthClient` for the backend's two user
//! endpoints (login and registration) and the error type every client
//! operation returns.
//!
//! Failure responses are normalized into user-facing messages: a JSON
//! `message` from the server wins verbatim, otherwise a fixed per-status
//! table applies.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::{AuthError, Endpoint};
