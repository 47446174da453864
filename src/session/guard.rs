//! Route guard: render-or-redirect decisions for protected screens.

use std::sync::Arc;

use tracing::debug;

use super::store::{SessionState, SessionStore};
use crate::models::Role;
use crate::nav::{Navigator, Route};

/// Outcome of guarding a screen against the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; show a neutral loading indicator and do
    /// not redirect.
    Loading,
    /// Render the wrapped screen.
    Render,
    /// Render nothing and navigate to the given route.
    Redirect(Route),
}

/// Pure decision function.
///
/// An unauthenticated visitor is sent to login. An authenticated user whose
/// role does not match the required one is silently retargeted to their own
/// role home, never to login and never to a forbidden page. In both cases
/// the wrapped screen must not render, not even for one frame.
pub fn decide(state: &SessionState, require_role: Option<Role>) -> GuardDecision {
    match state {
        SessionState::Hydrating => GuardDecision::Loading,
        SessionState::Unauthenticated => GuardDecision::Redirect(Route::Login),
        SessionState::Authenticated { user, .. } => match require_role {
            Some(required) if user.role != required => {
                GuardDecision::Redirect(user.role.home_route())
            }
            _ => GuardDecision::Render,
        },
    }
}

/// Guards one protected screen.
///
/// The host re-invokes [`RouteGuard::evaluate`] whenever the session state
/// or the required role changes; the decision is a pure reaction to the
/// current state, not a one-time check at mount. Redirects run through the
/// injected navigator after the decision is computed, never inside it.
pub struct RouteGuard {
    require_role: Option<Role>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(require_role: Option<Role>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            require_role,
            navigator,
        }
    }

    /// Decide for the store's current state, executing any redirect.
    pub fn evaluate(&self, store: &SessionStore) -> GuardDecision {
        let decision = decide(store.state(), self.require_role);
        if let GuardDecision::Redirect(route) = decision {
            debug!(path = route.path(), "guard redirect");
            self.navigator.navigate(route);
        }
        decision
    }
}
