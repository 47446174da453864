//! Client-side session state machine.
//!
//! `SessionStore` is the single source of truth for "who is logged in" and
//! the sole writer of credential state. It hydrates once from the vault at
//! startup, then moves between `Unauthenticated` and `Authenticated` in
//! response to login, register, and logout. Successful transitions emit a
//! navigation intent through the injected navigator; the store never drives
//! the UI itself.
//!
//! All mutation goes through `&mut self` on the UI thread. Overlapping
//! login calls are not deduplicated; the last write to the vault and the
//! in-memory state wins, and the caller serializes via its own UI disabling.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::api::{AuthClient, AuthPayload};
use crate::models::{Role, User};
use crate::nav::{Navigator, Route};
use crate::storage::{SessionVault, TOKEN_KEY, USER_KEY};

/// Authentication state. `Authenticated` carries the user and token
/// together, so one can never be set without the other.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Initial state, until the one-time restore attempt completes.
    Hydrating,
    Unauthenticated,
    Authenticated { user: User, token: String },
}

pub struct SessionStore {
    vault: Box<dyn SessionVault>,
    client: AuthClient,
    navigator: Arc<dyn Navigator>,
    state: SessionState,
}

impl SessionStore {
    /// Create a store in the `Hydrating` state without touching the vault.
    ///
    /// Hosts that want the restore observable (a loading indicator between
    /// construction and hydration) call this and then
    /// [`restore_session`](Self::restore_session); [`open`](Self::open)
    /// does both in one step.
    pub fn new(
        vault: Box<dyn SessionVault>,
        client: AuthClient,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            vault,
            client,
            navigator,
            state: SessionState::Hydrating,
        }
    }

    /// Construct and immediately restore the persisted session.
    pub fn open(
        vault: Box<dyn SessionVault>,
        client: AuthClient,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut store = Self::new(vault, client, navigator);
        store.restore_session();
        store
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// True only during the initial hydration attempt. Once a restore has
    /// run, this is false for the remainder of the store's lifetime.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Hydrating)
    }

    /// Restore the session from the vault.
    ///
    /// A well-formed pair of entries yields `Authenticated` with exactly
    /// that user and token. Anything else (either entry missing, or the
    /// user record failing to parse) yields `Unauthenticated` and wipes
    /// what was there, so a half-valid record cannot survive. Corruption is
    /// logged and recovered silently; it is never surfaced as an error.
    pub fn restore_session(&mut self) {
        let token = self.vault.get(TOKEN_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read token entry");
            None
        });
        let raw_user = self.vault.get(USER_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read user entry");
            None
        });

        self.state = match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(user_id = user.id, role = user.role.as_str(), "session restored");
                    SessionState::Authenticated { user, token }
                }
                Err(e) => {
                    warn!(error = %e, "Stored user record is malformed, clearing session");
                    self.wipe_vault();
                    SessionState::Unauthenticated
                }
            },
            (None, None) => SessionState::Unauthenticated,
            _ => {
                warn!("Partial persisted session, clearing");
                self.wipe_vault();
                SessionState::Unauthenticated
            }
        };
    }

    /// Force a re-hydration from the vault, for callers reacting to
    /// out-of-band changes. Same contract as the startup restore, except
    /// the store never re-enters `Hydrating`.
    pub fn check_auth(&mut self) {
        self.restore_session();
    }

    /// Authenticate and establish a session.
    ///
    /// On success the token and user are persisted, the in-memory state
    /// moves to `Authenticated` (both fields together), and a navigation
    /// intent to the role home is emitted. On failure nothing changes and
    /// the backend's message propagates to the caller for display.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        match self.client.login(email, password).await {
            Ok(payload) => self.establish(payload),
            Err(e) => {
                error!(error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Register a new account; on success the contract is the same as
    /// [`login`](Self::login).
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> Result<()> {
        match self.client.register(email, password, role, name).await {
            Ok(payload) => self.establish(payload),
            Err(e) => {
                error!(error = %e, "Registration failed");
                Err(e)
            }
        }
    }

    /// Drop the session. Safe to call when already logged out; the vault
    /// removes are no-ops and the login redirect is still emitted.
    pub fn logout(&mut self) -> Result<()> {
        self.vault.remove(TOKEN_KEY)?;
        self.vault.remove(USER_KEY)?;
        if !matches!(self.state, SessionState::Unauthenticated) {
            info!("logged out");
        }
        self.state = SessionState::Unauthenticated;
        self.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Persist a fresh auth payload and move to `Authenticated`.
    fn establish(&mut self, payload: AuthPayload) -> Result<()> {
        let AuthPayload { access_token, user } = payload;
        let user = user.into_user();
        let serialized =
            serde_json::to_string(&user).context("Failed to serialize user record")?;

        self.vault.put(TOKEN_KEY, &access_token)?;
        self.vault.put(USER_KEY, &serialized)?;

        let home = user.role.home_route();
        info!(user_id = user.id, role = user.role.as_str(), "session established");
        self.state = SessionState::Authenticated {
            user,
            token: access_token,
        };
        self.navigator.navigate(home);
        Ok(())
    }

    fn wipe_vault(&mut self) {
        if let Err(e) = self.vault.remove(TOKEN_KEY) {
            warn!(error = %e, "Failed to clear token entry");
        }
        if let Err(e) = self.vault.remove(USER_KEY) {
            warn!(error = %e, "Failed to clear user entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::storage::MemoryVault;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        fn routes(&self) -> Vec<Route> {
            self.routes.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    fn store_with(
        entries: &[(&str, &str)],
    ) -> (SessionStore, Arc<MemoryVault>, Arc<RecordingNavigator>) {
        let vault = Arc::new(MemoryVault::new());
        for (key, value) in entries {
            vault.put(key, value).unwrap();
        }
        let navigator = Arc::new(RecordingNavigator::default());
        let client = AuthClient::new("http://127.0.0.1:9").unwrap();
        let store = SessionStore::new(Box::new(vault.clone()), client, navigator.clone());
        (store, vault, navigator)
    }

    const CANDIDATE_JSON: &str = r#"{"id":1,"email":"a@b.com","role":"candidate"}"#;

    #[test]
    fn starts_hydrating() {
        let (store, _, _) = store_with(&[]);
        assert!(store.is_loading());
        assert_eq!(*store.state(), SessionState::Hydrating);
        assert_eq!(store.user(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn restore_with_valid_pair_authenticates() {
        let (mut store, _, navigator) =
            store_with(&[(TOKEN_KEY, "abc"), (USER_KEY, CANDIDATE_JSON)]);
        store.restore_session();

        assert!(!store.is_loading());
        assert_eq!(store.token(), Some("abc"));
        let user = store.user().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, Role::Candidate);
        // Hydration never redirects on its own.
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn restore_with_empty_vault_is_unauthenticated() {
        let (mut store, _, _) = store_with(&[]);
        store.restore_session();
        assert_eq!(*store.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn restore_with_missing_user_clears_partial_token() {
        let (mut store, vault, _) = store_with(&[(TOKEN_KEY, "abc")]);
        store.restore_session();

        assert_eq!(*store.state(), SessionState::Unauthenticated);
        assert_eq!(vault.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn restore_with_missing_token_clears_partial_user() {
        let (mut store, vault, _) = store_with(&[(USER_KEY, CANDIDATE_JSON)]);
        store.restore_session();

        assert_eq!(*store.state(), SessionState::Unauthenticated);
        assert_eq!(vault.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn restore_with_malformed_user_clears_both_entries() {
        let (mut store, vault, _) =
            store_with(&[(TOKEN_KEY, "abc"), (USER_KEY, "{not json")]);
        store.restore_session();

        assert_eq!(*store.state(), SessionState::Unauthenticated);
        assert_eq!(vault.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(vault.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn loading_goes_false_once_and_stays_false() {
        let (mut store, vault, _) = store_with(&[]);
        assert!(store.is_loading());
        store.restore_session();
        assert!(!store.is_loading());

        // A later check_auth re-reads the vault but never re-enters
        // Hydrating, even when it finds a session.
        vault.put(TOKEN_KEY, "abc").unwrap();
        vault.put(USER_KEY, CANDIDATE_JSON).unwrap();
        store.check_auth();
        assert!(!store.is_loading());
        assert_eq!(store.token(), Some("abc"));
    }

    #[test]
    fn logout_clears_entries_and_redirects_to_login() {
        let (mut store, vault, navigator) =
            store_with(&[(TOKEN_KEY, "abc"), (USER_KEY, CANDIDATE_JSON)]);
        store.restore_session();
        store.logout().unwrap();

        assert_eq!(*store.state(), SessionState::Unauthenticated);
        assert_eq!(vault.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(vault.get(USER_KEY).unwrap(), None);
        assert_eq!(navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn logout_when_logged_out_is_noop_plus_redirect() {
        let (mut store, _, navigator) = store_with(&[]);
        store.restore_session();
        store.logout().unwrap();
        store.logout().unwrap();

        assert_eq!(*store.state(), SessionState::Unauthenticated);
        assert_eq!(navigator.routes(), vec![Route::Login, Route::Login]);
    }
}
