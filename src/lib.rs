//! Client library for the Walkdown safety checklist application.
//!
//! Walkdown is a plant-floor inspection workflow: an employee signs in,
//! picks a position and shift, walks the checklist, and submits it with
//! closing remarks. This crate is the piece every front-end shell shares,
//! the session client that talks to the backend's user endpoints and keeps
//! the signed-in session in local storage.
//!
//! The entry point is [`AuthClient`], built from a [`ClientConfig`] and a
//! [`KeyValueStore`] backend. [`FileStore`] persists sessions across runs;
//! [`MemoryStore`] backs tests and throwaway sessions.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod storage;

pub use api::{AuthClient, AuthError};
pub use auth::SessionStore;
pub use config::ClientConfig;
pub use models::{Credentials, LoginResponse, RegistrationRequest, UserRecord};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
