use std::sync::Arc;

use log::warn;

use super::session_model::{
    AccessDecision, AccessRequirement, SessionUser, SESSION_USER_KEY,
};
use super::session_store::SessionStore;
use crate::errors::{Result, SessionError};

/// Contract for session state and page gating.
pub trait SessionServiceTrait: Send + Sync {
    /// The signed-in user, or `None` when the blob is absent or unreadable.
    fn current_user(&self) -> Option<SessionUser>;

    /// Persists the user blob (sign-in, or profile refresh after an update).
    fn store_user(&self, user: &SessionUser) -> Result<()>;

    /// Drops the session (sign-out).
    fn clear(&self);

    /// Gate decision for a page with the given requirement.
    fn check_access(&self, requirement: AccessRequirement) -> AccessDecision;
}

/// Session state over a pluggable store.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl SessionServiceTrait for SessionService {
    fn current_user(&self) -> Option<SessionUser> {
        let raw = self.store.get(SESSION_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                // An unreadable blob gates exactly like an absent one.
                warn!("Ignoring unreadable session user: {}", e);
                None
            }
        }
    }

    fn store_user(&self, user: &SessionUser) -> Result<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| SessionError::Encode(e.to_string()))?;
        self.store.set(SESSION_USER_KEY, raw);
        Ok(())
    }

    fn clear(&self) {
        self.store.remove(SESSION_USER_KEY);
    }

    fn check_access(&self, requirement: AccessRequirement) -> AccessDecision {
        let user = match self.current_user() {
            Some(user) => user,
            None => return AccessDecision::RedirectToLogin,
        };
        match requirement {
            AccessRequirement::SignedIn => AccessDecision::Granted,
            AccessRequirement::Admin => {
                if user.is_admin() {
                    AccessDecision::Granted
                } else {
                    AccessDecision::RedirectToHome
                }
            }
        }
    }
}
