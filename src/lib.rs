//! Session and route-guard core for the TalentGate recruiting client.
//!
//! The client renders candidate and recruiter portals over a REST backend;
//! this crate owns the one stateful piece of that: who is logged in, how a
//! session survives restarts, and whether a protected screen may render.
//!
//! - [`session::SessionStore`]: the session state machine. Hydrates once
//!   from durable storage, then moves between unauthenticated and
//!   authenticated in response to login, register, and logout.
//! - [`session::RouteGuard`]: render-or-redirect decisions for protected
//!   screens, reacting to the store's state.
//! - [`api::AuthClient`]: HTTP client for the auth backend.
//! - [`storage::SessionVault`]: the persisted session record.
//!
//! Navigation and storage are injected collaborators, so the state machine
//! is testable without a rendering environment.

pub mod api;
pub mod config;
pub mod models;
pub mod nav;
pub mod session;
pub mod storage;

pub use api::{ApiError, AuthClient};
pub use models::{Role, User};
pub use nav::{Navigator, Route};
pub use session::{GuardDecision, RouteGuard, SessionState, SessionStore};
pub use storage::{DiskVault, MemoryVault, SessionVault};
