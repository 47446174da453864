//! Domain types for the session core.
//!
//! - `User`: the authenticated identity held in memory and persisted to
//!   the vault
//! - `Role`: candidate or recruiter, which decides the home route
//! - `UserRecord`: the wire shape of a user in auth responses

pub mod user;

pub use user::{Role, User, UserRecord};
