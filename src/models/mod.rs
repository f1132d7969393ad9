//! Data models for the auth API.
//!
//! This module contains the request and response bodies exchanged with the
//! backend:
//!
//! - `Credentials`: login request body
//! - `RegistrationRequest`: registration request body
//! - `LoginResponse`: parsed login success body
//! - `UserRecord`: the opaque user object the backend returns

pub mod account;

pub use account::{Credentials, LoginResponse, RegistrationRequest, UserRecord};
