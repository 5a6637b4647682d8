use std::sync::Arc;

use log::debug;

use mimi_api_client::{AuthApi, LoginRequest, RegisterRequest, User};

use super::users_traits::AuthServiceTrait;
use crate::errors::Result;
use crate::session::{SessionServiceTrait, SessionUser};

/// Service for the sign-in lifecycle.
pub struct AuthService {
    auth_api: Arc<dyn AuthApi>,
    session: Arc<dyn SessionServiceTrait>,
}

impl AuthService {
    pub fn new(auth_api: Arc<dyn AuthApi>, session: Arc<dyn SessionServiceTrait>) -> Self {
        Self { auth_api, session }
    }
}

#[async_trait::async_trait]
impl AuthServiceTrait for AuthService {
    async fn sign_in(&self, request: &LoginRequest) -> Result<SessionUser> {
        let user = self.auth_api.login(request).await?;
        let session_user = SessionUser::from_profile(&user)?;
        self.session.store_user(&session_user)?;
        debug!("User {} signed in", user.id);
        Ok(session_user)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User> {
        Ok(self.auth_api.register(request).await?)
    }

    fn sign_out(&self) {
        self.session.clear();
    }
}
