//! The session state machine and the route guard built on it.
//!
//! `SessionStore` owns credential state; `RouteGuard` consumes it to decide
//! whether a protected screen renders, redirects to login, or retargets to
//! the user's own home.

pub mod guard;
pub mod store;

pub use guard::{decide, GuardDecision, RouteGuard};
pub use store::{SessionState, SessionStore};
