//! Session domain models.

use serde::{Deserialize, Serialize};

use mimi_api_client::User;

use crate::Result;

/// Session-store key holding the signed-in user blob.
pub const SESSION_USER_KEY: &str = "user";

/// Role granting access to the administration pages.
pub const ADMIN_ROLE: &str = "ADMIN";

/// The signed-in user as persisted in the session store.
///
/// Shape-tolerant: the id may arrive as `id` or `userId`, the role as `role`
/// or the first entry of `roles`, depending on which endpoint produced the
/// blob. Unrecognized fields round-trip through `extra` so re-persisting
/// loses nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionUser {
    /// The usable user id: `id`, falling back to `userId`.
    pub fn effective_id(&self) -> Option<i64> {
        self.id.or(self.user_id)
    }

    /// The effective role: `role`, falling back to the first of `roles`.
    pub fn primary_role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .or_else(|| self.roles.first().map(String::as_str))
    }

    pub fn is_admin(&self) -> bool {
        self.primary_role() == Some(ADMIN_ROLE)
    }

    /// Builds the session blob from a freshly fetched profile.
    pub fn from_profile(user: &User) -> Result<Self> {
        let value = serde_json::to_value(user)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// What a page requires before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    SignedIn,
    Admin,
}

/// Where the router should send the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    RedirectToLogin,
    RedirectToHome,
}
