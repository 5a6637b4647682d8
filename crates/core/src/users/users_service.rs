use std::sync::Arc;

use log::debug;

use mimi_api_client::{User, UserUpdate, UsersApi};

use super::users_traits::ProfileServiceTrait;
use crate::errors::Result;
use crate::session::{SessionServiceTrait, SessionUser};

/// Service for the profile page and user administration.
pub struct ProfileService {
    users_api: Arc<dyn UsersApi>,
    session: Arc<dyn SessionServiceTrait>,
}

impl ProfileService {
    pub fn new(users_api: Arc<dyn UsersApi>, session: Arc<dyn SessionServiceTrait>) -> Self {
        Self { users_api, session }
    }

    fn persist(&self, user: &User) -> Result<()> {
        let session_user = SessionUser::from_profile(user)?;
        self.session.store_user(&session_user)
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn load_profile(&self, user_id: i64) -> Result<User> {
        Ok(self.users_api.get_user(user_id).await?)
    }

    async fn update_profile(&self, user_id: i64, update: &UserUpdate) -> Result<User> {
        let user = self.users_api.update_user(user_id, update).await?;
        self.persist(&user)?;
        debug!("Profile {} updated", user_id);
        Ok(user)
    }

    async fn upload_avatar(
        &self,
        user_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<User> {
        let user = self.users_api.upload_avatar(user_id, file_name, bytes).await?;
        self.persist(&user)?;
        debug!("Avatar for {} replaced", user_id);
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users_api.list_users().await?)
    }
}
