//! REST client for the authentication backend.
//!
//! This module provides the `AuthClient` for the login and registration
//! endpoints. Failure responses carry a `detail` message that is surfaced
//! to the user verbatim.

pub mod client;
pub mod error;

pub use client::{AuthClient, AuthPayload};
pub use error::ApiError;
