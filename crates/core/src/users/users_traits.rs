//! Profile and auth service traits.

use async_trait::async_trait;

use mimi_api_client::{LoginRequest, RegisterRequest, User, UserUpdate};

use crate::errors::Result;
use crate::session::SessionUser;

/// Contract for profile reads and mutations.
///
/// Mutations return the refreshed profile and write it back into the
/// session store so the header and guards see the new state immediately.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn load_profile(&self, user_id: i64) -> Result<User>;

    async fn update_profile(&self, user_id: i64, update: &UserUpdate) -> Result<User>;

    async fn upload_avatar(&self, user_id: i64, file_name: &str, bytes: Vec<u8>) -> Result<User>;

    /// Every account; the backend restricts this to administrators.
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Contract for the sign-in lifecycle.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Authenticates and persists the session user; returns what was stored.
    async fn sign_in(&self, request: &LoginRequest) -> Result<SessionUser>;

    /// Creates an account. The caller signs in separately.
    async fn register(&self, request: &RegisterRequest) -> Result<User>;

    /// Drops the session.
    fn sign_out(&self);
}
