//! Navigation intents and the navigator seam.
//!
//! Session transitions never drive the UI directly. They compute a [`Route`]
//! and hand it to an injected [`Navigator`], which keeps redirects out of
//! the decision path and the state machine testable without a router.

use tracing::info;

/// Logical destinations the session core can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    CandidateHome,
    RecruiterHome,
}

impl Route {
    /// Path string for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::CandidateHome => "/candidate/dashboard",
            Route::RecruiterHome => "/recruiter/dashboard",
        }
    }
}

/// Executes navigation intents emitted by the session core.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator for hosts without a router; records each intent in the log.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!(path = route.path(), "navigate");
    }
}
