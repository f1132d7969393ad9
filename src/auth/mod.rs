//! Authentication module for session state and input validation.
//!
//! This module provides:
//! - `SessionStore`: token and user-record persistence over a pluggable store
//! - validation helpers shared by the screens and the client
//!
//! Sessions persist until an explicit logout; nothing expires client-side.

pub mod session;
pub mod validate;

pub use session::SessionStore;
pub use validate::{validate_email, validate_password, validate_registration};
